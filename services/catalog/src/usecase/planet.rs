use crate::domain::repository::PlanetRepository;
use crate::domain::types::Planet;
use crate::error::CatalogError;

// ── ListPlanets ──────────────────────────────────────────────────────────────

pub struct ListPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> ListPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, CatalogError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Planet, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::PlanetNotFound)
    }
}
