//! Shared application state injected into handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::JsonLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<JsonLinkRepository>>,
    /// Data file backing the store, checked by `GET /health`.
    pub data_file: PathBuf,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<JsonLinkRepository>>, data_file: PathBuf) -> Self {
        Self {
            link_service,
            data_file,
        }
    }
}
