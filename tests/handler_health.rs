mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tempfile::TempDir;
use tinylink::api::handlers::{health_handler, index_handler};

#[tokio::test]
async fn test_index_liveness() {
    let app = Router::new().route("/", get(index_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "URL Shortener backend is running.");
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state(&dir).await;
    common::create_test_link(&state, "https://example.com").await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
    let message = json["checks"]["store"]["message"].as_str().unwrap();
    assert!(message.starts_with("1 links in "), "{message}");
}

#[tokio::test]
async fn test_health_degraded_when_data_file_missing() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state(&dir).await;
    std::fs::remove_file(common::data_file(&dir)).unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_health_degraded_when_data_file_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state(&dir).await;
    let path = common::data_file(&dir);
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert!(
        json["checks"]["store"]["message"]
            .as_str()
            .unwrap()
            .contains("not a regular file")
    );
}
