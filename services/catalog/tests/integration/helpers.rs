use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait};

use holonet_catalog::domain::repository::{CharacterRepository, PlanetRepository, UserRepository};
use holonet_catalog::domain::types::{
    Character, NewCharacter, NewPlanet, NewUser, Planet, User,
};
use holonet_catalog::infra::db::ensure_schema;
use holonet_catalog::router::build_router;
use holonet_catalog::state::AppState;
use holonet_catalog_schema::favorite;

// ── Test app ─────────────────────────────────────────────────────────────────

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Router over a fresh in-memory SQLite database. A single pooled
/// connection keeps every query on the same in-memory database.
pub async fn test_app() -> TestApp {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    ensure_schema(&db).await.unwrap();

    let state = AppState { db };
    let server = TestServer::new(build_router(state.clone())).unwrap();
    TestApp { server, state }
}

// ── Seed helpers ─────────────────────────────────────────────────────────────

pub async fn seed_user(state: &AppState, email: &str) -> User {
    state
        .user_repo()
        .create(&NewUser {
            email: email.to_owned(),
            password: "correct-horse".to_owned(),
            is_active: true,
        })
        .await
        .unwrap()
}

pub async fn seed_character(state: &AppState, name: &str) -> Character {
    state
        .character_repo()
        .create(&NewCharacter {
            name: name.to_owned(),
            height: Some(172),
            mass: Some(77),
            gender: Some("male".to_owned()),
            birth_year: Some("19BBY".to_owned()),
            eye_color: None,
        })
        .await
        .unwrap()
}

pub async fn seed_planet(state: &AppState, name: &str) -> Planet {
    state
        .planet_repo()
        .create(&NewPlanet {
            name: name.to_owned(),
            climate: Some("temperate".to_owned()),
            terrain: None,
            population: Some(2_000_000_000),
            diameter: Some(12_500),
            rotation_period: Some(24),
        })
        .await
        .unwrap()
}

pub async fn favorite_count(state: &AppState) -> u64 {
    favorite::Entity::find().count(&state.db).await.unwrap()
}
