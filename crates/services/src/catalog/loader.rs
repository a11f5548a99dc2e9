use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use finder_core::model::{Record, RecordId, Region};

use crate::catalog::outcome::FetchOutcome;
use crate::catalog::progress::ProgressSink;
use crate::error::{FetchError, LoadError};
use crate::source::RecordSource;

/// Fetches a catalog in sequential, internally concurrent batches.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn RecordSource>,
    batch_size: usize,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>, batch_size: usize) -> Self {
        Self { source, batch_size }
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch one id, substituting the fallback record on any failure.
    pub async fn fetch_one(&self, id: RecordId) -> FetchOutcome {
        let outcome = match self.source.fetch_record(id).await {
            Ok(record) if record.id() == id => FetchOutcome::Fetched(record),
            Ok(record) => FetchOutcome::fallback(
                id,
                FetchError::InvalidPayload(format!(
                    "requested id {id}, source answered {}",
                    record.id()
                )),
            ),
            Err(reason) => FetchOutcome::fallback(id, reason),
        };

        if let Some(reason) = outcome.reason() {
            warn!(%id, error = %reason, "fetch failed, using fallback record");
        }
        outcome
    }

    /// Load one record per id.
    ///
    /// Ids are processed in chunks of `batch_size`; fetches inside a chunk run
    /// concurrently and the next chunk starts only after the previous settled.
    /// After every chunk `sink` receives all records so far, sorted by id.
    /// The returned records are sorted by id and match `ids` one to one.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidBatchSize` for a zero batch size,
    /// `LoadError::DuplicateId` if an id repeats, and `LoadError::Sink` if the
    /// observer fails. Individual fetch failures are never errors.
    pub async fn load(
        &self,
        ids: &[RecordId],
        sink: &mut dyn ProgressSink,
    ) -> Result<Vec<Record>, LoadError> {
        if self.batch_size == 0 {
            return Err(LoadError::InvalidBatchSize);
        }
        ensure_unique(ids)?;

        let mut loaded: Vec<Record> = Vec::with_capacity(ids.len());
        let mut fallbacks = 0usize;

        for (index, chunk) in ids.chunks(self.batch_size).enumerate() {
            debug!(chunk = index, size = chunk.len(), "fetching chunk");

            let outcomes = join_all(chunk.iter().map(|id| self.fetch_one(*id))).await;
            fallbacks += outcomes.iter().filter(|o| o.is_fallback()).count();
            loaded.extend(outcomes.into_iter().map(FetchOutcome::into_record));
            loaded.sort_by_key(Record::id);

            sink.on_progress(loaded.clone())?;
        }

        info!(total = loaded.len(), fallbacks, "catalog load finished");
        Ok(loaded)
    }

    /// Load every id of `region`.
    ///
    /// # Errors
    ///
    /// See [`CatalogLoader::load`].
    pub async fn load_region(
        &self,
        region: Region,
        sink: &mut dyn ProgressSink,
    ) -> Result<Vec<Record>, LoadError> {
        info!(%region, ids = region.len(), batch_size = self.batch_size, "loading region");
        self.load(&region.ids(), sink).await
    }
}

fn ensure_unique(ids: &[RecordId]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(LoadError::DuplicateId(*id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::progress::{NoProgress, SnapshotLog};
    use crate::error::SinkError;
    use crate::source::InMemorySource;
    use finder_core::model::{DEFAULT_TAG, ImageKind, TagName};

    fn id(value: u32) -> RecordId {
        RecordId::new(value).unwrap()
    }

    fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<RecordId> {
        range.map(id).collect()
    }

    fn named(value: u32) -> Record {
        Record::with_primary_image(
            id(value),
            format!("mon-{value}"),
            vec![TagName::new("grass").unwrap()],
        )
        .unwrap()
    }

    fn source_with(range: std::ops::RangeInclusive<u32>) -> InMemorySource {
        InMemorySource::with_records(range.map(named))
    }

    #[tokio::test]
    async fn fetch_one_reports_fallback_reason() {
        let source = source_with(1..=1);
        source.fail(id(1));
        let loader = CatalogLoader::new(Arc::new(source), 4);

        let outcome = loader.fetch_one(id(1)).await;
        assert!(outcome.is_fallback());
        assert!(matches!(outcome.reason(), Some(FetchError::Unavailable(_))));
        assert_eq!(outcome.record().image().kind(), ImageKind::Fallback);
    }

    #[tokio::test]
    async fn fetch_one_rejects_mismatched_ids() {
        let source = InMemorySource::new();
        source.insert(named(9));
        // A misbehaving source answering 9 for 10.
        struct Wrong(InMemorySource);
        #[async_trait::async_trait]
        impl RecordSource for Wrong {
            async fn fetch_record(&self, _id: RecordId) -> Result<Record, FetchError> {
                self.0.fetch_record(RecordId::new(9).unwrap()).await
            }
            async fn list_tags(&self) -> Result<Vec<TagName>, FetchError> {
                self.0.list_tags().await
            }
        }
        let loader = CatalogLoader::new(Arc::new(Wrong(source)), 4);

        let outcome = loader.fetch_one(id(10)).await;
        assert!(matches!(outcome.reason(), Some(FetchError::InvalidPayload(_))));
        assert_eq!(outcome.into_record(), Record::fallback(id(10)));
    }

    #[tokio::test]
    async fn progress_count_is_ceil_of_ids_over_batch() {
        for batch_size in 1..=7 {
            let loader = CatalogLoader::new(Arc::new(source_with(1..=10)), batch_size);
            let mut log = SnapshotLog::new();
            let records = loader.load(&ids(1..=10), &mut log).await.unwrap();

            assert_eq!(records.len(), 10);
            assert_eq!(log.snapshots().len(), 10usize.div_ceil(batch_size));
        }
    }

    #[tokio::test]
    async fn snapshots_grow_and_stay_sorted() {
        let loader = CatalogLoader::new(Arc::new(source_with(1..=9)), 4);
        let input: Vec<RecordId> = [9, 3, 7, 1, 5, 2, 8, 4, 6].into_iter().map(id).collect();
        let mut log = SnapshotLog::new();

        let records = loader.load(&input, &mut log).await.unwrap();

        assert_eq!(log.sizes(), vec![4, 8, 9]);
        for snapshot in log.snapshots() {
            assert!(snapshot.windows(2).all(|w| w[0].id() < w[1].id()));
        }
        let got: Vec<u32> = records.iter().map(|r| r.id().value()).collect();
        assert_eq!(got, (1..=9).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn chunks_follow_input_order() {
        let source = source_with(1..=6);
        let loader = CatalogLoader::new(Arc::new(source.clone()), 2);
        let input: Vec<RecordId> = [5, 6, 1, 2, 3, 4].into_iter().map(id).collect();

        loader.load(&input, &mut NoProgress).await.unwrap();

        let requested = source.requests();
        assert_eq!(requested.len(), 6);
        let first_chunk: HashSet<RecordId> = requested[..2].iter().copied().collect();
        assert_eq!(first_chunk, [id(5), id(6)].into_iter().collect());
    }

    #[tokio::test]
    async fn failed_ids_get_fallback_records() {
        let source = source_with(1..=3);
        source.fail(id(2));
        let loader = CatalogLoader::new(Arc::new(source), 2);

        let records = loader.load(&ids(1..=3), &mut NoProgress).await.unwrap();

        let fallback = &records[1];
        assert_eq!(fallback.id(), id(2));
        assert_eq!(fallback.image().kind(), ImageKind::Fallback);
        assert_eq!(fallback.tags()[0].as_str(), DEFAULT_TAG);
        assert!(!records[0].image().is_fallback());
        assert!(!records[2].image().is_fallback());
    }

    #[tokio::test]
    async fn empty_input_never_calls_the_sink() {
        let loader = CatalogLoader::new(Arc::new(InMemorySource::new()), 3);
        let mut log = SnapshotLog::new();

        let records = loader.load(&[], &mut log).await.unwrap();

        assert!(records.is_empty());
        assert!(log.snapshots().is_empty());
    }

    #[tokio::test]
    async fn zero_batch_size_is_rejected() {
        let loader = CatalogLoader::new(Arc::new(source_with(1..=2)), 0);
        let err = loader.load(&ids(1..=2), &mut NoProgress).await.unwrap_err();
        assert_eq!(err, LoadError::InvalidBatchSize);
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected_before_fetching() {
        let source = source_with(1..=2);
        let loader = CatalogLoader::new(Arc::new(source.clone()), 2);
        let input = vec![id(1), id(2), id(1)];

        let err = loader.load(&input, &mut NoProgress).await.unwrap_err();

        assert_eq!(err, LoadError::DuplicateId(id(1)));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_aborts_the_load() {
        let source = source_with(1..=6);
        let loader = CatalogLoader::new(Arc::new(source.clone()), 2);
        let mut calls = 0usize;
        let mut sink = |_snapshot: Vec<Record>| -> Result<(), SinkError> {
            calls += 1;
            if calls == 2 {
                return Err(SinkError::new("renderer gone"));
            }
            Ok(())
        };

        let err = loader.load(&ids(1..=6), &mut sink).await.unwrap_err();

        assert_eq!(err, LoadError::Sink(SinkError::new("renderer gone")));
        assert_eq!(source.requests().len(), 4);
    }

    #[tokio::test]
    async fn load_region_covers_every_id() {
        let (start, end) = Region::Johto.bounds();
        let loader = CatalogLoader::new(Arc::new(source_with(start..=end)), 20);
        let mut log = SnapshotLog::new();

        let records = loader.load_region(Region::Johto, &mut log).await.unwrap();

        assert_eq!(records.len(), Region::Johto.len());
        assert_eq!(log.snapshots().len(), 5);
        assert!(records.iter().all(|r| !r.image().is_fallback()));
    }
}
