#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use memlink::api::handlers::health_handler;
use memlink::api::routes::link_routes;
use memlink::infrastructure::persistence::InMemoryLinkRepository;
use memlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:9000/";

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), BASE_URL);
    (state, repository)
}

pub fn create_test_router(state: AppState) -> Router {
    link_routes()
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(create_test_router(state)).unwrap();
    (server, repository)
}

pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.get("/short").add_query_param("url", url).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["url"]
        .as_str()
        .unwrap()
        .to_string()
}
