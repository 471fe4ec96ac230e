mod common;

use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;
use tinylink::routes::app_router;

async fn server(dir: &TempDir) -> TestServer {
    let state = common::create_test_state(dir).await;
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_shorten_resolve_list_scenario() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir).await;

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let code = first["code"].as_str().unwrap().to_string();
    assert_eq!(first["clicks"], 0);

    let again = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(again["code"], code.as_str());
    assert_eq!(again["clicks"], 0);

    let redirect = server.get(&format!("/s/{code}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com/a");

    let list = server.get("/api/urls").await.json::<serde_json::Value>();
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["code"], code.as_str());
    assert_eq!(items[0]["clicks"], 1);

    let shortened_again = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(shortened_again["clicks"], 1);
}

#[tokio::test]
async fn test_cors_header_on_every_response() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir).await;

    let ok = server
        .get("/")
        .add_header("origin", "http://frontend.test")
        .await;
    assert_eq!(ok.header("access-control-allow-origin"), "*");

    let missing = server
        .get("/s/nothere")
        .add_header("origin", "http://frontend.test")
        .await;
    missing.assert_status_not_found();
    assert_eq!(missing.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_cors_preflight() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir).await;

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/shorten")
        .add_header("origin", "http://frontend.test")
        .add_header("access-control-request-method", "POST")
        .add_header("access-control-request-headers", "content-type")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
    let allowed = response.header("access-control-allow-headers");
    assert!(
        allowed
            .to_str()
            .unwrap()
            .to_ascii_lowercase()
            .contains("content-type")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir).await;

    server.get("/nope").await.assert_status_not_found();
}
