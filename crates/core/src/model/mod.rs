mod ids;
mod image;
mod record;
mod region;
mod tag;

pub use ids::{RecordId, RecordIdError};
pub use image::{FALLBACK_IMAGE_BASE, ImageError, ImageKind, ImageRef, PRIMARY_IMAGE_BASE};
pub use record::{Record, RecordError};
pub use region::{Region, UnknownRegion};
pub use tag::{DEFAULT_TAG, TagError, TagName};
