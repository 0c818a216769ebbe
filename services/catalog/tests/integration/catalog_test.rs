use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use serde_json::{Value, json};

use holonet_catalog::handlers::sitemap::ENDPOINTS;

use crate::helpers::{seed_character, seed_planet, seed_user, test_app};

#[tokio::test]
async fn should_list_users_without_credentials() {
    let app = test_app().await;
    let leia = seed_user(&app.state, "leia@alderaan.gov").await;
    let han = seed_user(&app.state, "han@falcon.io").await;

    let resp = app.server.get("/users").await;

    resp.assert_status_ok();
    resp.assert_json(&json!([
        { "id": leia.id, "email": "leia@alderaan.gov" },
        { "id": han.id, "email": "han@falcon.io" },
    ]));
}

#[tokio::test]
async fn should_get_each_planet_by_id() {
    let app = test_app().await;
    let planets = [
        seed_planet(&app.state, "Alderaan").await,
        seed_planet(&app.state, "Hoth").await,
        seed_planet(&app.state, "Dagobah").await,
    ];

    for planet in planets {
        let resp = app.server.get(&format!("/planets/{}", planet.id)).await;
        resp.assert_status_ok();
        let body: Value = resp.json();
        assert_eq!(body["id"], planet.id);
        assert_eq!(body["name"], planet.name.as_str());
        assert_eq!(body["population"], 2_000_000_000_i64);
        assert!(body["terrain"].is_null());
    }
}

#[tokio::test]
async fn should_get_person_by_id() {
    let app = test_app().await;
    let luke = seed_character(&app.state, "Luke Skywalker").await;

    let resp = app.server.get(&format!("/people/{}", luke.id)).await;

    resp.assert_status_ok();
    resp.assert_json(&json!({
        "id": luke.id,
        "name": "Luke Skywalker",
        "height": 172,
        "mass": 77,
        "gender": "male",
        "birth_year": "19BBY",
        "eye_color": null,
    }));
}

#[tokio::test]
async fn should_return_404_for_unknown_people_and_planets() {
    let app = test_app().await;
    seed_character(&app.state, "Luke Skywalker").await;
    seed_planet(&app.state, "Tatooine").await;

    for path in ["/people/999", "/planets/999", "/people/0", "/planets/-1"] {
        let resp = app.server.get(path).await;
        resp.assert_status(StatusCode::NOT_FOUND);
        let body: Value = resp.json();
        assert!(body["message"].is_string(), "{path} should carry a message");
    }

    let body: Value = app.server.get("/people/999").await.json();
    assert_eq!(body["kind"], "CHARACTER_NOT_FOUND");
    let body: Value = app.server.get("/planets/999").await.json();
    assert_eq!(body["kind"], "PLANET_NOT_FOUND");
}

#[tokio::test]
async fn should_return_404_for_ids_beyond_key_range() {
    let app = test_app().await;

    let resp = app.server.get("/planets/3000000000").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&json!({ "kind": "PLANET_NOT_FOUND", "message": "planet not found" }));

    let resp = app.server.get("/people/3000000000").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&json!({ "kind": "CHARACTER_NOT_FOUND", "message": "character not found" }));
}

#[tokio::test]
async fn should_reject_non_integer_ids_with_json_error() {
    let app = test_app().await;
    for path in ["/people/abc", "/planets/1.5"] {
        let resp = app.server.get(path).await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({
            "kind": "INVALID_PARAMETER",
            "message": "id must be an integer",
        }));
    }
}

#[tokio::test]
async fn should_list_catalog_idempotently() {
    let app = test_app().await;
    seed_user(&app.state, "leia@alderaan.gov").await;
    seed_character(&app.state, "Luke Skywalker").await;
    seed_character(&app.state, "Darth Vader").await;
    seed_planet(&app.state, "Tatooine").await;

    for path in ["/users", "/people", "/planets"] {
        let first: Value = app.server.get(path).await.json();
        let second: Value = app.server.get(path).await.json();
        let third: Value = app.server.get(path).await.json();
        assert_eq!(first, second, "{path} changed between calls");
        assert_eq!(second, third, "{path} changed between calls");
    }

    let people: Value = app.server.get("/people").await.json();
    assert_eq!(people.as_array().unwrap().len(), 2);
    assert_eq!(people[0]["name"], "Luke Skywalker");
    assert_eq!(people[1]["name"], "Darth Vader");
}

#[tokio::test]
async fn should_list_empty_catalog() {
    let app = test_app().await;
    for path in ["/users", "/people", "/planets"] {
        let resp = app.server.get(path).await;
        resp.assert_status_ok();
        resp.assert_json(&json!([]));
    }
}

#[tokio::test]
async fn should_greet_on_user_route() {
    let app = test_app().await;
    let resp = app.server.get("/user").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "msg": "Hello, this is your GET /user response" }));
}

#[tokio::test]
async fn should_list_every_route_in_sitemap() {
    let app = test_app().await;
    let body: Value = app.server.get("/").await.json();
    let endpoints = body["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), ENDPOINTS.len());
    assert!(endpoints.contains(&json!({ "method": "DELETE", "path": "/favorite/people/{id}" })));
}

#[tokio::test]
async fn should_route_every_sitemap_endpoint() {
    let app = test_app().await;
    for endpoint in ENDPOINTS {
        let method = Method::from_bytes(endpoint.method.as_bytes()).unwrap();
        let path = endpoint.path.replace("{id}", "1");
        let resp = app.server.method(method, &path).await;

        let status = resp.status_code();
        assert_ne!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {} is not routed",
            endpoint.method,
            endpoint.path
        );
        // Handler 404s carry a JSON error; the router's fallback is empty.
        if status == StatusCode::NOT_FOUND {
            let body: Value = resp.json();
            assert!(
                body["kind"].is_string(),
                "{} {} fell through to the router",
                endpoint.method,
                endpoint.path
            );
        }
    }
}

#[tokio::test]
async fn should_report_healthy_and_ready() {
    let app = test_app().await;
    app.server.get("/healthz").await.assert_status_ok();
    app.server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_echo_request_id() {
    let app = test_app().await;
    let resp = app
        .server
        .get("/users")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me"),
        )
        .await;
    assert_eq!(resp.header("x-request-id"), "trace-me");
}
