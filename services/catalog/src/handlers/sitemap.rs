use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
    Endpoint { method, path }
}

/// Every public route served by the catalog. Keep in sync with
/// `router::build_router`.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/healthz"),
    endpoint("GET", "/readyz"),
    endpoint("GET", "/users"),
    endpoint("GET", "/users/favorites"),
    endpoint("GET", "/user"),
    endpoint("GET", "/people"),
    endpoint("GET", "/people/{id}"),
    endpoint("GET", "/planets"),
    endpoint("GET", "/planets/{id}"),
    endpoint("POST", "/favorite/planet/{id}"),
    endpoint("DELETE", "/favorite/planet/{id}"),
    endpoint("POST", "/favorite/people/{id}"),
    endpoint("DELETE", "/favorite/people/{id}"),
];

#[derive(Serialize)]
pub struct SitemapResponse {
    pub endpoints: &'static [Endpoint],
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn sitemap() -> Json<SitemapResponse> {
    Json(SitemapResponse {
        endpoints: ENDPOINTS,
    })
}
