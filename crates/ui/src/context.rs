use std::sync::Arc;

use finder_core::model::Region;
use services::{CatalogLoader, CatalogSessions, TagService};

pub trait UiApp: Send + Sync {
    fn initial_region(&self) -> Region;

    fn loader(&self) -> Arc<CatalogLoader>;
    fn tags(&self) -> Arc<TagService>;
    fn sessions(&self) -> Arc<CatalogSessions>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_region: Region,
    loader: Arc<CatalogLoader>,
    tags: Arc<TagService>,
    sessions: Arc<CatalogSessions>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_region: app.initial_region(),
            loader: app.loader(),
            tags: app.tags(),
            sessions: app.sessions(),
        }
    }

    #[must_use]
    pub fn initial_region(&self) -> Region {
        self.initial_region
    }

    #[must_use]
    pub fn loader(&self) -> Arc<CatalogLoader> {
        Arc::clone(&self.loader)
    }

    #[must_use]
    pub fn tags(&self) -> Arc<TagService> {
        Arc::clone(&self.tags)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<CatalogSessions> {
        Arc::clone(&self.sessions)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
