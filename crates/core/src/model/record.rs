use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    image::{ImageError, ImageRef},
    ids::RecordId,
    tag::TagName,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    #[error("record name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// One catalog entry, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData", into = "RecordData")]
pub struct Record {
    id: RecordId,
    display_name: String,
    image: ImageRef,
    tags: Vec<TagName>,
}

#[derive(Serialize, Deserialize)]
struct RecordData {
    id: RecordId,
    display_name: String,
    image: ImageRef,
    #[serde(default)]
    tags: Vec<TagName>,
}

impl TryFrom<RecordData> for Record {
    type Error = RecordError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        Self::new(data.id, data.display_name, data.image, data.tags)
    }
}

impl From<Record> for RecordData {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            display_name: record.display_name,
            image: record.image,
            tags: record.tags,
        }
    }
}

impl Record {
    /// Build a record from already-normalized parts.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::EmptyName` if the display name is blank.
    pub fn new(
        id: RecordId,
        display_name: impl Into<String>,
        image: ImageRef,
        tags: Vec<TagName>,
    ) -> Result<Self, RecordError> {
        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        Ok(Self {
            id,
            display_name,
            image,
            tags,
        })
    }

    /// Build a record whose image is the name-addressed artwork.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if the name is blank.
    pub fn with_primary_image(
        id: RecordId,
        display_name: impl Into<String>,
        tags: Vec<TagName>,
    ) -> Result<Self, RecordError> {
        let display_name = display_name.into();
        let image = ImageRef::primary(&display_name).map_err(|err| match err {
            ImageError::EmptyName => RecordError::EmptyName,
            other => RecordError::Image(other),
        })?;
        Self::new(id, display_name, image, tags)
    }

    /// Substitute record synthesized from the id alone.
    #[must_use]
    pub fn fallback(id: RecordId) -> Self {
        Self {
            id,
            display_name: format!("#{id}"),
            image: ImageRef::fallback(id),
            tags: vec![TagName::neutral()],
        }
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// The id-derived sprite, for renderers that swap images on load errors.
    #[must_use]
    pub fn fallback_image(&self) -> ImageRef {
        ImageRef::fallback(self.id)
    }

    #[must_use]
    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }

    #[must_use]
    pub fn primary_tag(&self) -> Option<&TagName> {
        self.tags.first()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &TagName) -> bool {
        self.tags.contains(tag)
    }
}
