#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http_source;
pub mod source;
pub mod tag_service;

pub use app_services::FinderServices;
pub use catalog::{
    CatalogLoader, CatalogSessions, FetchOutcome, GuardedSink, LivenessToken, NoProgress,
    ProgressSink, SessionHandle, SessionId, SnapshotLog,
};
pub use config::FinderConfig;
pub use error::{ConfigError, FetchError, FinderServicesError, LoadError, SinkError};
pub use http_source::HttpRecordSource;
pub use source::{InMemorySource, RecordSource};
pub use tag_service::TagService;
