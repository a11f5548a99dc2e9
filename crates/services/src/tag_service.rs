use std::sync::Arc;

use tracing::error;

use finder_core::model::TagName;

use crate::source::RecordSource;

/// Upstream categories that never apply to catalog entries.
pub const HIDDEN_TAGS: [&str; 3] = ["shadow", "unknown", "stellar"];

/// Lists the categories offered as filter chips.
#[derive(Clone)]
pub struct TagService {
    source: Arc<dyn RecordSource>,
}

impl TagService {
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Every selectable tag, in upstream order.
    ///
    /// A failed listing is logged and yields an empty list; it never blocks loading.
    pub async fn list_tags(&self) -> Vec<TagName> {
        match self.source.list_tags().await {
            Ok(tags) => tags
                .into_iter()
                .filter(|tag| !HIDDEN_TAGS.contains(&tag.as_str()))
                .collect(),
            Err(err) => {
                error!(error = %err, "failed to load tag list");
                Vec::new()
            }
        }
    }
}
