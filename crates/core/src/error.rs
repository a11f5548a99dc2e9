use thiserror::Error;

use crate::model::{ImageError, RecordError, RecordIdError, TagError, UnknownRegion};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    RecordId(#[from] RecordIdError),
    #[error(transparent)]
    Tag(#[from] TagError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Region(#[from] UnknownRegion),
}
