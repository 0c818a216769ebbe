use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{FavoriteEntry, FavoriteItem, FavoriteTarget};
use crate::error::CatalogError;
use crate::handlers::params::{UserIdQuery, parse_id};
use crate::handlers::people::CharacterResponse;
use crate::handlers::planet::PlanetResponse;
use crate::handlers::user::MessageResponse;
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, RemoveFavoriteUseCase};

// ── Response types ───────────────────────────────────────────────────────────

/// Exactly one of `character` / `planet` is non-null.
#[derive(Serialize, Debug, PartialEq)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub character: Option<CharacterResponse>,
    pub planet: Option<PlanetResponse>,
}

impl From<FavoriteEntry> for FavoriteResponse {
    fn from(entry: FavoriteEntry) -> Self {
        let (character, planet) = match entry.item {
            FavoriteItem::Character(character) => (Some(character.into()), None),
            FavoriteItem::Planet(planet) => (None, Some(planet.into())),
        };
        Self {
            id: entry.id,
            user_id: entry.user_id,
            character,
            planet,
        }
    }
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddFavoriteRequest {
    pub user_id: Option<i32>,
}

impl AddFavoriteRequest {
    fn from_body(body: Result<Json<Self>, JsonRejection>) -> Result<i32, CatalogError> {
        let Json(request) = body.map_err(|e| CatalogError::InvalidBody(e.body_text()))?;
        request
            .user_id
            .ok_or(CatalogError::MissingParameter("user_id"))
    }
}

async fn add_favorite(
    state: AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<FavoriteResponse>), CatalogError> {
    let usecase = AddFavoriteUseCase {
        users: state.user_repo(),
        characters: state.character_repo(),
        planets: state.planet_repo(),
        favorites: state.favorite_repo(),
    };
    let entry = usecase.execute(user_id, target).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

async fn remove_favorite(
    state: AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<(), CatalogError> {
    let usecase = RemoveFavoriteUseCase {
        repo: state.favorite_repo(),
    };
    usecase.execute(user_id, target).await
}

// ── POST /favorite/planet/{id} ───────────────────────────────────────────────

pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<String>,
    body: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteResponse>), CatalogError> {
    let user_id = AddFavoriteRequest::from_body(body)?;
    let planet_id = parse_id(&planet_id, CatalogError::PlanetNotFound)?;
    add_favorite(state, user_id, FavoriteTarget::Planet(planet_id)).await
}

// ── POST /favorite/people/{id} ───────────────────────────────────────────────

pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<String>,
    body: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteResponse>), CatalogError> {
    let user_id = AddFavoriteRequest::from_body(body)?;
    let people_id = parse_id(&people_id, CatalogError::CharacterNotFound)?;
    add_favorite(state, user_id, FavoriteTarget::Character(people_id)).await
}

// ── DELETE /favorite/planet/{id}?user_id= ────────────────────────────────────

pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<String>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<MessageResponse>, CatalogError> {
    let user_id = query.require()?;
    let planet_id = parse_id(&planet_id, CatalogError::FavoriteNotFound)?;
    remove_favorite(state, user_id, FavoriteTarget::Planet(planet_id)).await?;
    Ok(Json(MessageResponse {
        msg: "Favorite planet deleted",
    }))
}

// ── DELETE /favorite/people/{id}?user_id= ────────────────────────────────────

pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<String>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<MessageResponse>, CatalogError> {
    let user_id = query.require()?;
    let people_id = parse_id(&people_id, CatalogError::FavoriteNotFound)?;
    remove_favorite(state, user_id, FavoriteTarget::Character(people_id)).await?;
    Ok(Json(MessageResponse {
        msg: "Favorite character deleted",
    }))
}
