#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use hash_redirect::infrastructure::store::InMemoryStore;
use hash_redirect::routes::app_routes;
use hash_redirect::state::AppState;

pub const BASE_URL: &str = "http://localhost:8787";

pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), BASE_URL);
    (state, store)
}

pub fn create_test_router() -> (Router, Arc<InMemoryStore>) {
    let (state, store) = create_test_state();
    (app_routes(state, Duration::from_secs(5)), store)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryStore>) {
    let (app, store) = create_test_router();
    (TestServer::new(app).unwrap(), store)
}

/// Extracts the code from a create response body.
pub fn code_from_body(body: &str) -> String {
    let short_url = body
        .lines()
        .find_map(|line| line.strip_prefix("Short URL: "))
        .expect("body has a Short URL line");

    short_url
        .rsplit('/')
        .next()
        .expect("short URL ends with a code")
        .to_string()
}
