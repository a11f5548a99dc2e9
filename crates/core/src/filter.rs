//! Conjunctive record predicates used by the grid.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::model::{Record, RecordId, Region, TagName};

/// Active filter inputs. A record is visible only if every predicate holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    text: String,
    tags: BTreeSet<TagName>,
    range: Option<RangeInclusive<RecordId>>,
}

impl RecordFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = TagName>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: RangeInclusive<RecordId>) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_region(self, region: Region) -> Self {
        self.with_range(region.range())
    }

    /// Store the search text as typed; matching ignores case and surrounding whitespace.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_range(&mut self, range: Option<RangeInclusive<RecordId>>) {
        self.range = range;
    }

    /// Adds the tag if absent, removes it otherwise.
    pub fn toggle_tag(&mut self, tag: TagName) {
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeSet<TagName> {
        &self.tags
    }

    #[must_use]
    pub fn is_selected(&self, tag: &TagName) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn range(&self) -> Option<&RangeInclusive<RecordId>> {
        self.range.as_ref()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_text(record) && self.matches_tags(record) && self.matches_range(record)
    }

    /// Visible subset, in input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    fn matches_text(&self, record: &Record) -> bool {
        let needle = self.text.trim().to_lowercase();
        needle.is_empty() || record.display_name().to_lowercase().contains(&needle)
    }

    fn matches_tags(&self, record: &Record) -> bool {
        self.tags.iter().all(|tag| record.has_tag(tag))
    }

    fn matches_range(&self, record: &Record) -> bool {
        self.range
            .as_ref()
            .is_none_or(|range| range.contains(&record.id()))
    }
}
