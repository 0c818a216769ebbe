use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0} is required")]
    MissingParameter(&'static str),
    #[error("{0} must be an integer")]
    InvalidParameter(&'static str),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("user not found")]
    UserNotFound,
    #[error("character not found")]
    CharacterNotFound,
    #[error("planet not found")]
    PlanetNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("favorite already exists")]
    FavoriteAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MISSING_PARAMETER",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CharacterNotFound => "CHARACTER_NOT_FOUND",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::FavoriteAlreadyExists => "FAVORITE_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::InvalidParameter(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UserNotFound
            | Self::CharacterNotFound
            | Self::PlanetNotFound
            | Self::FavoriteNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists | Self::FavoriteAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are already recorded by the trace layer.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
