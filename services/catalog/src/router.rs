use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;

use holonet_core::health::healthz;
use holonet_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    favorite::{
        add_favorite_person, add_favorite_planet, delete_favorite_person, delete_favorite_planet,
    },
    health::readyz,
    people::{get_people, get_person},
    planet::{get_planet, get_planets},
    sitemap::sitemap,
    user::{get_user_favorites, get_users, hello},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(get_users))
        .route("/users/favorites", get(get_user_favorites))
        .route("/user", get(hello))
        // Catalog
        .route("/people", get(get_people))
        .route("/people/{id}", get(get_person))
        .route("/planets", get(get_planets))
        .route("/planets/{id}", get(get_planet))
        // Favorites
        .route(
            "/favorite/planet/{id}",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(add_favorite_person).delete(delete_favorite_person),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
