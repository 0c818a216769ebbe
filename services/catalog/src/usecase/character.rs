use crate::domain::repository::CharacterRepository;
use crate::domain::types::Character;
use crate::error::CatalogError;

// ── ListCharacters ───────────────────────────────────────────────────────────

pub struct ListCharactersUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> ListCharactersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Character>, CatalogError> {
        self.repo.list().await
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Character, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::CharacterNotFound)
    }
}
