use sea_orm::{ConnectionTrait, Database};
use tracing::info;

use holonet_catalog::config::CatalogConfig;
use holonet_catalog::infra::db::ensure_schema;
use holonet_catalog::router::build_router;
use holonet_catalog::state::AppState;

#[tokio::main]
async fn main() {
    holonet_core::tracing::init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    ensure_schema(&db)
        .await
        .expect("failed to create catalog schema");
    info!(backend = ?db.get_database_backend(), "catalog schema ready");

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
