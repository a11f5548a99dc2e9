//! Owned view state for the finder grid and its pure transitions.

use finder_core::RecordFilter;
use finder_core::model::{Record, Region, TagName};
use services::SessionId;

/// Everything the grid renders from. Replaced wholesale on each action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinderState {
    region: Region,
    session: Option<SessionId>,
    records: Vec<Record>,
    loading: bool,
    filter: RecordFilter,
    all_tags: Vec<TagName>,
}

/// Inputs to `FinderState::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinderAction {
    /// A new load session started for `region`.
    SelectRegion { region: Region, session: SessionId },
    /// Cumulative snapshot from `session`.
    Progress {
        session: SessionId,
        records: Vec<Record>,
    },
    /// Final records from `session`.
    Finished {
        session: SessionId,
        records: Vec<Record>,
    },
    /// `session` ended without a result.
    Failed { session: SessionId },
    SetSearch(String),
    ToggleTag(TagName),
    ClearTags,
    TagsLoaded(Vec<TagName>),
}

impl FinderState {
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            filter: RecordFilter::new().with_region(region),
            ..Self::default()
        }
    }

    /// Produce the next state. Updates from sessions other than the current one are ignored.
    #[must_use]
    pub fn apply(mut self, action: FinderAction) -> Self {
        match action {
            FinderAction::SelectRegion { region, session } => {
                self.region = region;
                self.session = Some(session);
                self.records = Vec::new();
                self.loading = true;
                self.filter.set_range(Some(region.range()));
            }
            FinderAction::Progress { session, records } => {
                if self.is_current(session) {
                    self.records = records;
                }
            }
            FinderAction::Finished { session, records } => {
                if self.is_current(session) {
                    self.records = records;
                    self.loading = false;
                }
            }
            FinderAction::Failed { session } => {
                if self.is_current(session) {
                    self.loading = false;
                }
            }
            FinderAction::SetSearch(text) => self.filter.set_text(text),
            FinderAction::ToggleTag(tag) => self.filter.toggle_tag(tag),
            FinderAction::ClearTags => self.filter.clear_tags(),
            FinderAction::TagsLoaded(tags) => self.all_tags = tags,
        }
        self
    }

    fn is_current(&self, session: SessionId) -> bool {
        self.session == Some(session)
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    #[must_use]
    pub fn all_tags(&self) -> &[TagName] {
        &self.all_tags
    }

    /// Records passing every active filter, by id.
    #[must_use]
    pub fn visible(&self) -> Vec<&Record> {
        self.filter.apply(&self.records)
    }

    /// Nothing to show yet: full-screen loader.
    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.loading && self.records.is_empty()
    }

    /// Partial grid on screen while later batches arrive.
    #[must_use]
    pub fn show_more_indicator(&self) -> bool {
        self.loading && !self.records.is_empty()
    }
}
