use tracing::info;

use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{FavoriteEntry, FavoriteItem, FavoriteTarget};
use crate::error::CatalogError;

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<R: FavoriteRepository> {
    pub repo: R,
}

impl<R: FavoriteRepository> ListFavoritesUseCase<R> {
    /// Unknown users simply have no favorites.
    pub async fn execute(&self, user_id: i32) -> Result<Vec<FavoriteEntry>, CatalogError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U, C, P, F>
where
    U: UserRepository,
    C: CharacterRepository,
    P: PlanetRepository,
    F: FavoriteRepository,
{
    pub users: U,
    pub characters: C,
    pub planets: P,
    pub favorites: F,
}

impl<U, C, P, F> AddFavoriteUseCase<U, C, P, F>
where
    U: UserRepository,
    C: CharacterRepository,
    P: PlanetRepository,
    F: FavoriteRepository,
{
    pub async fn execute(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteEntry, CatalogError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(CatalogError::UserNotFound);
        }
        let item = match target {
            FavoriteTarget::Character(id) => self
                .characters
                .find_by_id(id)
                .await?
                .map(FavoriteItem::Character)
                .ok_or(CatalogError::CharacterNotFound)?,
            FavoriteTarget::Planet(id) => self
                .planets
                .find_by_id(id)
                .await?
                .map(FavoriteItem::Planet)
                .ok_or(CatalogError::PlanetNotFound)?,
        };
        if self.favorites.find(user_id, target).await?.is_some() {
            return Err(CatalogError::FavoriteAlreadyExists);
        }

        let favorite = self.favorites.create(user_id, target).await?;
        info!(favorite_id = favorite.id, user_id, ?target, "favorite added");
        Ok(FavoriteEntry {
            id: favorite.id,
            user_id: favorite.user_id,
            item,
        })
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<R: FavoriteRepository> {
    pub repo: R,
}

impl<R: FavoriteRepository> RemoveFavoriteUseCase<R> {
    pub async fn execute(&self, user_id: i32, target: FavoriteTarget) -> Result<(), CatalogError> {
        let favorite = self
            .repo
            .find(user_id, target)
            .await?
            .ok_or(CatalogError::FavoriteNotFound)?;
        // A concurrent delete may have won the race.
        if !self.repo.delete(favorite.id).await? {
            return Err(CatalogError::FavoriteNotFound);
        }
        info!(favorite_id = favorite.id, user_id, ?target, "favorite removed");
        Ok(())
    }
}
