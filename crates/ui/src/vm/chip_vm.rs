use finder_core::RecordFilter;
use finder_core::model::TagName;

use crate::vm::type_style::type_icon_url;

/// Toggle chip for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeChipVm {
    pub tag: TagName,
    pub label: String,
    pub icon_url: Option<&'static str>,
    pub active: bool,
}

#[must_use]
pub fn map_type_chips(tags: &[TagName], filter: &RecordFilter) -> Vec<TypeChipVm> {
    tags.iter()
        .map(|tag| TypeChipVm {
            tag: tag.clone(),
            label: tag.as_str().to_owned(),
            icon_url: type_icon_url(tag.as_str()),
            active: filter.is_selected(tag),
        })
        .collect()
}
