use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::Character;
use crate::error::CatalogError;
use crate::handlers::params::parse_id;
use crate::state::AppState;
use crate::usecase::character::{GetCharacterUseCase, ListCharactersUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize, Debug, PartialEq)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            gender: character.gender,
            birth_year: character.birth_year,
            eye_color: character.eye_color,
        }
    }
}

// ── GET /people ──────────────────────────────────────────────────────────────

pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, CatalogError> {
    let usecase = ListCharactersUseCase {
        repo: state.character_repo(),
    };
    let characters = usecase.execute().await?;
    Ok(Json(characters.into_iter().map(Into::into).collect()))
}

// ── GET /people/{id} ─────────────────────────────────────────────────────────

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CharacterResponse>, CatalogError> {
    let id = parse_id(&id, CatalogError::CharacterNotFound)?;
    let usecase = GetCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = usecase.execute(id).await?;
    Ok(Json(character.into()))
}
