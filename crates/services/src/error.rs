//! Shared error types for the services crate.

use thiserror::Error;

use finder_core::model::{RecordId, UnknownRegion};

/// Errors from a single upstream request. Absorbed by the loader, never surfaced by `load`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("upstream request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("upstream payload is invalid: {0}")]
    InvalidPayload(String),
    #[error("no record for id {0}")]
    NotFound(RecordId),
    #[error("source unavailable for id {0}")]
    Unavailable(RecordId),
}

/// Raised by a progress observer to abort a load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("progress observer failed: {0}")]
pub struct SinkError(String);

impl SinkError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Hard failures of `CatalogLoader::load`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("batch size must be at least 1")]
    InvalidBatchSize,
    #[error("id {0} appears more than once")]
    DuplicateId(RecordId),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Errors emitted while reading `FinderConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("api base url cannot be empty")]
    EmptyBaseUrl,
    #[error("invalid batch size: {raw}")]
    InvalidBatchSize { raw: String },
    #[error("invalid request timeout: {raw}")]
    InvalidTimeout { raw: String },
    #[error(transparent)]
    Region(#[from] UnknownRegion),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FinderServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] FetchError),
}
