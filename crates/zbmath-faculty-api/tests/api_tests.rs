//! Router tests driven through `tower::ServiceExt::oneshot`.
//!
//! The cache is backed by a mock source that serves the static fallback
//! data, so these tests exercise the HTTP contract without any network.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use zbmath_faculty_api::cache::ProfileCache;
use zbmath_faculty_api::config::DEFAULT_FACULTY;
use zbmath_faculty_api::fallback::FallbackProvider;
use zbmath_faculty_api::fetcher::ProfileSource;
use zbmath_faculty_api::models::AuthorProfile;
use zbmath_faculty_api::server::{AppState, create_router};

/// Serves canned fallback data for every identifier.
#[derive(Default)]
struct CannedSource {
    provider: FallbackProvider,
}

#[async_trait]
impl ProfileSource for CannedSource {
    async fn fetch(&self, identifier: &str) -> AuthorProfile {
        self.provider.get(identifier)
    }
}

fn test_router() -> Router {
    let cache = Arc::new(ProfileCache::new(
        Arc::new(CannedSource::default()),
        Duration::from_secs(3600),
    ));
    let faculty = DEFAULT_FACULTY.iter().map(ToString::to_string).collect();
    create_router(AppState { cache, faculty })
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let router = test_router();
    let (status, body) = get_json(&router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_faculty_defaults_to_roster() {
    let router = test_router();
    let (status, body) = get_json(&router, "/api/faculty").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][0]["name"], "Terence Tao");
    assert!(body["timestamp"].as_f64().unwrap() > 0.0);

    // Roster members without canned data come back as error profiles, not
    // HTTP failures.
    assert_eq!(body["data"][3]["num_publications"], 0);
    assert_eq!(body["data"][3]["error"], "Author not found in zbMATH");
}

#[tokio::test]
async fn test_faculty_with_explicit_authors() {
    let router = test_router();
    let (status, body) =
        get_json(&router, "/api/faculty?authors=tao.terence,%20alon.noga").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], "tao.terence");
    assert_eq!(body["data"][1]["id"], "alon.noga");
}

#[tokio::test]
async fn test_faculty_by_id() {
    let router = test_router();
    let (status, body) = get_json(&router, "/api/faculty/wiles.andrew").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Andrew Wiles");
    assert_eq!(body["data"]["metrics"]["h_index"], 45);
}

#[tokio::test]
async fn test_faculty_by_id_unknown_still_succeeds() {
    let router = test_router();
    let (status, body) = get_json(&router, "/api/faculty/unknown.person").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["error"], "Author not found in zbMATH");
}

#[tokio::test]
async fn test_publications_year_filter() {
    let router = test_router();

    // Tao's canned list has publications in 2020, 2019, and 2018.
    let (_, body) = get_json(&router, "/api/faculty/tao.terence/publications?year=2019").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["year"], 2019);

    // An unparseable year filter is silently ignored.
    let (_, body) = get_json(&router, "/api/faculty/tao.terence/publications?year=banana").await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_publications_limit() {
    let router = test_router();

    let (_, body) = get_json(&router, "/api/faculty/tao.terence/publications?limit=1").await;
    assert_eq!(body["count"], 1);

    // Unparseable limit falls back to the default.
    let (_, body) = get_json(&router, "/api/faculty/tao.terence/publications?limit=abc").await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_metrics_projection() {
    let router = test_router();
    let (status, body) = get_json(&router, "/api/faculty/alon.noga/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Noga Alon");
    assert_eq!(body["metrics"]["h_index"], 95);
    assert_eq!(body["num_publications"], 450);
    assert_eq!(body["num_co_authors"], 120);
    // The projection must not embed the full profile.
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_cache_clear_and_status_round_trip() {
    let router = test_router();

    get_json(&router, "/api/faculty/tao.terence").await;
    let (_, body) = get_json(&router, "/api/cache/status").await;
    assert_eq!(body["cache_size"], 1);
    assert_eq!(body["cache_expiry_seconds"], 3600);
    assert_eq!(body["entries"]["tao.terence"]["expired"], false);
    assert_eq!(body["entries"]["tao.terence"]["publications_count"], 3);

    let (status, body) = post_json(&router, "/api/cache/clear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cache cleared");

    let (_, body) = get_json(&router, "/api/cache/status").await;
    assert_eq!(body["cache_size"], 0);
}

#[tokio::test]
async fn test_unknown_route_envelope() {
    let router = test_router();
    let (status, body) = get_json(&router, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["path"], "/api/nope");
}
