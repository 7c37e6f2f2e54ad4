mod common;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tower::ServiceExt;
use hash_redirect::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use hash_redirect::routes::{app_router, app_routes};
use hash_redirect::state::AppState;

/// Backend that is always down.
struct UnreachableStore;

#[async_trait]
impl KeyValueStore for UnreachableStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put_if_absent(&self, _key: &str, _value: &str) -> StoreResult<bool> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct ReadProgress {
    started: AtomicBool,
    completed: AtomicBool,
}

/// Backend whose reads outlast any reasonable deadline.
struct SlowStore {
    progress: Arc<ReadProgress>,
}

#[async_trait]
impl KeyValueStore for SlowStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        self.progress.started.store(true, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(3)).await;
        self.progress.completed.store(true, Ordering::SeqCst);
        Ok(Some("https://example.com/a".to_string()))
    }

    async fn put_if_absent(&self, _key: &str, _value: &str) -> StoreResult<bool> {
        Ok(true)
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

fn unreachable_server() -> TestServer {
    let state = AppState::new(Arc::new(UnreachableStore), common::BASE_URL);
    TestServer::new(app_routes(state, Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/nope").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/nope");
}

#[tokio::test]
async fn test_extra_path_segments_not_found() {
    let (server, store) = common::create_test_server();

    store
        .put_if_absent("2dce7d0e", "https://example.com/a")
        .await
        .unwrap();

    let response = server.get("/s/2dce7d0e/extra").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_store_failure_on_create_is_generic_500() {
    let server = unreachable_server();

    let response = server
        .get("/p")
        .add_query_param("url", "https://example.com/a")
        .await;

    assert_eq!(response.status_code(), 500);

    let body = response.text();
    assert!(!body.contains("connection refused"));

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_store_failure_on_resolve_and_list_is_500() {
    let server = unreachable_server();

    assert_eq!(server.get("/s/2dce7d0e").await.status_code(), 500);
    assert_eq!(server.get("/l").await.status_code(), 500);
}

#[tokio::test]
async fn test_missing_url_checked_before_store() {
    let server = unreachable_server();

    let response = server.get("/p").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, store) = common::create_test_state();
    let app = app_router(state, Duration::from_secs(5));

    store
        .put_if_absent("2dce7d0e", "https://example.com/a")
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/s/2dce7d0e/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/a"
    );
}

#[tokio::test]
async fn test_resolve_with_empty_code_segment_is_bad_request() {
    let (state, _store) = common::create_test_state();
    let app = app_router(state, Duration::from_secs(5));

    let response = app
        .oneshot(Request::builder().uri("/s/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_through_full_router() {
    let (state, _store) = common::create_test_state();
    let app = app_router(state, Duration::from_secs(5));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/p?url=https%3A%2F%2Fexample.com%2Fa")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "Accepted.\nShort URL: http://localhost:8787/s/2dce7d0e\nOriginal URL: https://example.com/a"
    );
}

#[tokio::test]
async fn test_request_deadline_aborts_store_call() {
    let progress = Arc::new(ReadProgress::default());
    let store = SlowStore {
        progress: progress.clone(),
    };
    let state = AppState::new(Arc::new(store), common::BASE_URL);
    let server = TestServer::new(app_routes(state, Duration::from_millis(200))).unwrap();

    let started_at = Instant::now();
    let response = server.get("/s/2dce7d0e").await;

    assert_eq!(response.status_code(), StatusCode::REQUEST_TIMEOUT);
    assert!(started_at.elapsed() < Duration::from_secs(3));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(progress.started.load(Ordering::SeqCst));
    assert!(!progress.completed.load(Ordering::SeqCst));
}
