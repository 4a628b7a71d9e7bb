use std::sync::Arc;

use crate::render::Renderer;
use crate::store::CatalogStore;

/// Shared request state. The store and renderer are injected here so
/// handlers never reach for process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, renderer: Arc<dyn Renderer>) -> Self {
        Self { store, renderer }
    }
}
