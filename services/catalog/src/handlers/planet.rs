use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::Planet;
use crate::error::CatalogError;
use crate::handlers::params::parse_id;
use crate::state::AppState;
use crate::usecase::planet::{GetPlanetUseCase, ListPlanetsUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize, Debug, PartialEq)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
        }
    }
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, CatalogError> {
    let usecase = ListPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(Into::into).collect()))
}

// ── GET /planets/{id} ────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlanetResponse>, CatalogError> {
    let id = parse_id(&id, CatalogError::PlanetNotFound)?;
    let usecase = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = usecase.execute(id).await?;
    Ok(Json(planet.into()))
}
