#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Character, Favorite, FavoriteEntry, FavoriteTarget, NewCharacter, NewPlanet, NewUser, Planet,
    User,
};
use crate::error::CatalogError;

/// Repository for catalog accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, CatalogError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogError>;
    /// Fails with `UserAlreadyExists` when the email is taken.
    async fn create(&self, user: &NewUser) -> Result<User, CatalogError>;
}

/// Repository for characters (`/people`).
pub trait CharacterRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, CatalogError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, CatalogError>;
    async fn create(&self, character: &NewCharacter) -> Result<Character, CatalogError>;
}

/// Repository for planets.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, CatalogError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, CatalogError>;
    async fn create(&self, planet: &NewPlanet) -> Result<Planet, CatalogError>;
}

/// Repository for user favorites.
pub trait FavoriteRepository: Send + Sync {
    /// All favorites of a user with their targets loaded, oldest first.
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<FavoriteEntry>, CatalogError>;

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, CatalogError>;

    async fn create(&self, user_id: i32, target: FavoriteTarget)
    -> Result<Favorite, CatalogError>;

    /// Delete a favorite by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
}
