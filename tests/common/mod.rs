#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::JsonLinkRepository;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://localhost:5000";

pub fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("data.json")
}

pub async fn create_test_service(path: &Path) -> Arc<LinkService<JsonLinkRepository>> {
    let repository = JsonLinkRepository::load(path).await.unwrap();
    Arc::new(LinkService::new(Arc::new(repository), BASE_URL))
}

pub async fn create_test_state(dir: &TempDir) -> AppState {
    let path = data_file(dir);
    AppState::new(create_test_service(&path).await, path)
}

/// Shortens `url` directly through the service and returns the code.
pub async fn create_test_link(state: &AppState, url: &str) -> String {
    state.link_service.shorten(url).await.unwrap().link.code
}
