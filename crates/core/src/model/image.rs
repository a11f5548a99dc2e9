use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::ids::RecordId;

/// Directory holding the high-quality artwork, addressed by lower-case name.
pub const PRIMARY_IMAGE_BASE: &str = "https://img.pokemondb.net/sprites/home/normal/";

/// Directory holding the id-addressed sprites used when anything else fails.
pub const FALLBACK_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageError {
    #[error("image name cannot be empty")]
    EmptyName,
    #[error("invalid image url: {0}")]
    InvalidUrl(String),
}

/// Where an image reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Primary,
    Fallback,
}

/// A resolvable image locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ImageData", into = "ImageData")]
pub struct ImageRef {
    kind: ImageKind,
    url: String,
}

#[derive(Serialize, Deserialize)]
struct ImageData {
    kind: ImageKind,
    url: String,
}

impl TryFrom<ImageData> for ImageRef {
    type Error = ImageError;

    fn try_from(data: ImageData) -> Result<Self, Self::Error> {
        let url = Url::parse(data.url.trim()).map_err(|e| ImageError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            kind: data.kind,
            url: url.into(),
        })
    }
}

impl From<ImageRef> for ImageData {
    fn from(image: ImageRef) -> Self {
        Self {
            kind: image.kind,
            url: image.url,
        }
    }
}

impl ImageRef {
    /// Artwork addressed by the record's name, e.g. `.../normal/bulbasaur.png`.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::EmptyName` for a blank name.
    pub fn primary(name: &str) -> Result<Self, ImageError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(ImageError::EmptyName);
        }

        let mut url =
            Url::parse(PRIMARY_IMAGE_BASE).map_err(|e| ImageError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ImageError::InvalidUrl(PRIMARY_IMAGE_BASE.to_string()))?
            .pop_if_empty()
            .push(&format!("{name}.png"));

        Ok(Self {
            kind: ImageKind::Primary,
            url: url.into(),
        })
    }

    /// Sprite derived only from the id. Never touches the network.
    #[must_use]
    pub fn fallback(id: RecordId) -> Self {
        Self {
            kind: ImageKind::Fallback,
            url: format!("{FALLBACK_IMAGE_BASE}{id}.png"),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.kind == ImageKind::Fallback
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Parse the locator as a `Url`.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::InvalidUrl` if the stored text does not parse.
    pub fn to_url(&self) -> Result<Url, ImageError> {
        Url::parse(&self.url).map_err(|e| ImageError::InvalidUrl(e.to_string()))
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
