mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tempfile::TempDir;
use tinylink::api::handlers::redirect_handler;
use tinylink::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/s/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state(&dir).await;
    let code = common::create_test_link(&state, "https://example.com/target").await;
    let server = server(state);

    let response = server.get(&format!("/s/{code}")).await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state(&dir).await;
    let code = common::create_test_link(&state, "https://example.com/count").await;
    let server = server(state.clone());

    for _ in 0..3 {
        server.get(&format!("/s/{code}")).await;
    }

    let link = state
        .link_service
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|l| l.link.code == code)
        .unwrap();
    assert_eq!(link.link.clicks, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let dir = TempDir::new().unwrap();
    let state = common::create_test_state(&dir).await;
    let code = common::create_test_link(&state, "https://example.com/other").await;
    let server = server(state.clone());

    let response = server.get("/s/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Short URL not found");

    let links = state.link_service.list().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].link.code, code);
    assert_eq!(links[0].link.clicks, 0);
}
