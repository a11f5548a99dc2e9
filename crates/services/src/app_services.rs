use std::sync::Arc;

use crate::catalog::{CatalogLoader, CatalogSessions};
use crate::config::FinderConfig;
use crate::error::FinderServicesError;
use crate::http_source::HttpRecordSource;
use crate::source::RecordSource;
use crate::tag_service::TagService;

/// Assembles app-facing services around one record source.
#[derive(Clone)]
pub struct FinderServices {
    config: FinderConfig,
    loader: Arc<CatalogLoader>,
    tags: Arc<TagService>,
    sessions: Arc<CatalogSessions>,
}

impl FinderServices {
    /// Build services backed by the HTTP API named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `FinderServicesError` if the HTTP client cannot be created.
    pub fn http(config: FinderConfig) -> Result<Self, FinderServicesError> {
        let source: Arc<dyn RecordSource> = Arc::new(HttpRecordSource::new(&config)?);
        Ok(Self::with_source(config, source))
    }

    /// Build services over any source (tests, prototypes).
    #[must_use]
    pub fn with_source(config: FinderConfig, source: Arc<dyn RecordSource>) -> Self {
        let loader = Arc::new(CatalogLoader::new(Arc::clone(&source), config.batch_size));
        let tags = Arc::new(TagService::new(source));
        Self {
            config,
            loader,
            tags,
            sessions: Arc::new(CatalogSessions::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;

    #[test]
    fn loader_uses_configured_batch_size() {
        let config = FinderConfig {
            batch_size: 7,
            ..FinderConfig::default()
        };
        let services = FinderServices::with_source(config, Arc::new(InMemorySource::new()));
        assert_eq!(services.loader().batch_size(), 7);
    }

    #[test]
    fn http_services_build_from_defaults() {
        let services = FinderServices::http(FinderConfig::default()).unwrap();
        assert_eq!(services.config().batch_size, 20);
    }
}
