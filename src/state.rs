//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Builds the state around a backend and the public origin for short links.
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store, base_url)),
        }
    }
}
