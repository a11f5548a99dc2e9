use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Catalog number of a record. Always positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RecordId(u32);

impl RecordId {
    /// Creates a new `RecordId`.
    ///
    /// # Errors
    ///
    /// Returns `RecordIdError::Zero` for `0`; catalog numbers start at 1.
    pub fn new(id: u32) -> Result<Self, RecordIdError> {
        if id == 0 {
            return Err(RecordIdError::Zero);
        }
        Ok(Self(id))
    }

    /// Builds an id from a value known to be positive, clamping `0` up to `1`.
    pub(crate) fn clamped(id: u32) -> Self {
        Self(id.max(1))
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Zero-padded catalog number, at least three digits wide (`"007"`, `"1025"`).
    #[must_use]
    pub fn padded(&self) -> String {
        format!("{:03}", self.0)
    }
}

impl TryFrom<u32> for RecordId {
    type Error = RecordIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for u32 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for building or parsing a `RecordId`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordIdError {
    #[error("record id must be positive")]
    Zero,
    #[error("failed to parse RecordId from {raw:?}")]
    Parse { raw: String },
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = raw.parse::<u32>().map_err(|_| RecordIdError::Parse {
            raw: raw.to_string(),
        })?;
        RecordId::new(value)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
