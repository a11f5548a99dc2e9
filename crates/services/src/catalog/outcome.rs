use finder_core::model::{Record, RecordId};

use crate::error::FetchError;

/// Result of fetching one id. Both arms carry a usable record.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Record),
    Fallback { record: Record, reason: FetchError },
}

impl FetchOutcome {
    /// Substitute the id-derived fallback for a failed fetch.
    #[must_use]
    pub fn fallback(id: RecordId, reason: FetchError) -> Self {
        Self::Fallback {
            record: Record::fallback(id),
            reason,
        }
    }

    #[must_use]
    pub fn record(&self) -> &Record {
        match self {
            Self::Fetched(record) | Self::Fallback { record, .. } => record,
        }
    }

    #[must_use]
    pub fn into_record(self) -> Record {
        match self {
            Self::Fetched(record) | Self::Fallback { record, .. } => record,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    #[must_use]
    pub fn reason(&self) -> Option<&FetchError> {
        match self {
            Self::Fetched(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}
