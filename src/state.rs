//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Link service over any repository implementation.
pub type SharedLinkService = Arc<LinkService<dyn LinkRepository>>;

/// Application state cloned into each request.
///
/// All clones share the same link store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: SharedLinkService,
}

impl AppState {
    /// Builds state around a repository and the base URL short links use.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url)),
        }
    }
}
