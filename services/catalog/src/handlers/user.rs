use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::error::CatalogError;
use crate::handlers::favorite::FavoriteResponse;
use crate::handlers::params::UserIdQuery;
use crate::state::AppState;
use crate::usecase::favorite::ListFavoritesUseCase;
use crate::usecase::user::ListUsersUseCase;

/// Public view of a user. Credentials never leave the service.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, CatalogError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    let items = users
        .into_iter()
        .map(|user| UserResponse {
            id: user.id,
            email: user.email,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /users/favorites?user_id= ────────────────────────────────────────────

pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<FavoriteResponse>>, CatalogError> {
    let user_id = query.require()?;
    let usecase = ListFavoritesUseCase {
        repo: state.favorite_repo(),
    };
    let favorites = usecase.execute(user_id).await?;
    Ok(Json(favorites.into_iter().map(Into::into).collect()))
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        msg: "Hello, this is your GET /user response",
    })
}
