use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use finder_core::model::{Record, RecordId, TagName};

use crate::error::FetchError;

/// Upstream contract for catalog records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and normalize the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport, status or payload failures.
    async fn fetch_record(&self, id: RecordId) -> Result<Record, FetchError>;

    /// Fetch the names of every category known upstream.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the listing cannot be retrieved.
    async fn list_tags(&self) -> Result<Vec<TagName>, FetchError>;
}

/// Scripted source for tests and prototyping.
///
/// Ids listed with `fail` always error; ids without a record error with `NotFound`.
#[derive(Clone, Default)]
pub struct InMemorySource {
    records: Arc<Mutex<HashMap<RecordId, Record>>>,
    failing: Arc<Mutex<HashSet<RecordId>>>,
    tags: Arc<Mutex<Option<Vec<TagName>>>>,
    requests: Arc<Mutex<Vec<RecordId>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source holding `records`.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let source = Self::new();
        for record in records {
            source.insert(record);
        }
        source
    }

    pub fn insert(&self, record: Record) {
        lock(&self.records).insert(record.id(), record);
    }

    /// Force every fetch for `id` to fail.
    pub fn fail(&self, id: RecordId) {
        lock(&self.failing).insert(id);
    }

    /// Serve `tags` from `list_tags`. Until called, the listing fails.
    pub fn set_tags(&self, tags: Vec<TagName>) {
        *lock(&self.tags) = Some(tags);
    }

    /// Ids requested so far, in request order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordId> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch_record(&self, id: RecordId) -> Result<Record, FetchError> {
        lock(&self.requests).push(id);
        if lock(&self.failing).contains(&id) {
            return Err(FetchError::Unavailable(id));
        }
        lock(&self.records)
            .get(&id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }

    async fn list_tags(&self) -> Result<Vec<TagName>, FetchError> {
        lock(&self.tags)
            .clone()
            .ok_or_else(|| FetchError::InvalidPayload("tag listing not configured".into()))
    }
}
