use finder_core::model::{Record, RecordId};
use url::form_urlencoded::byte_serialize;

use crate::vm::type_style::type_background;

/// Card search page the tiles link to.
pub const SEARCH_BASE_URL: &str = "https://pokestop.cl/search/";

/// UI-ready grid tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVm {
    pub id: RecordId,
    pub number: String,
    pub name: String,
    pub image: String,
    pub fallback_image: String,
    pub search_url: String,
    pub background: String,
}

/// Map visible records into tiles.
#[must_use]
pub fn map_tiles(records: &[&Record]) -> Vec<TileVm> {
    records.iter().map(|record| build_tile(record)).collect()
}

#[must_use]
pub fn build_tile(record: &Record) -> TileVm {
    let tags: Vec<&str> = record.tags().iter().map(|tag| tag.as_str()).collect();
    TileVm {
        id: record.id(),
        number: format!("#{}", record.id().padded()),
        name: record.display_name().to_owned(),
        image: record.image().as_str().to_owned(),
        fallback_image: record.fallback_image().as_str().to_owned(),
        search_url: search_url(record.display_name()),
        background: type_background(tags.as_slice()),
    }
}

/// Search link for `name`, query-encoded.
#[must_use]
pub fn search_url(name: &str) -> String {
    let query: String = byte_serialize(name.as_bytes()).collect();
    format!("{SEARCH_BASE_URL}?q={query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::model::TagName;

    fn id(value: u32) -> RecordId {
        RecordId::new(value).unwrap()
    }

    #[test]
    fn builds_tile_for_fetched_record() {
        let record = Record::with_primary_image(
            id(1),
            "bulbasaur",
            vec![TagName::new("grass").unwrap(), TagName::new("poison").unwrap()],
        )
        .unwrap();

        let tile = build_tile(&record);
        assert_eq!(tile.number, "#001");
        assert_eq!(tile.name, "bulbasaur");
        assert_eq!(
            tile.image,
            "https://img.pokemondb.net/sprites/home/normal/bulbasaur.png"
        );
        assert!(tile.fallback_image.ends_with("/sprites/pokemon/1.png"));
        assert_eq!(tile.search_url, "https://pokestop.cl/search/?q=bulbasaur");
        assert!(tile.background.starts_with("linear-gradient"));
    }

    #[test]
    fn fallback_tile_uses_sprite_for_both_images() {
        let tile = build_tile(&Record::fallback(id(25)));
        assert_eq!(tile.name, "#25");
        assert_eq!(tile.image, tile.fallback_image);
        assert_eq!(tile.background, "#ececec");
        assert_eq!(tile.search_url, "https://pokestop.cl/search/?q=%2325");
    }

    #[test]
    fn search_url_encodes_spaces_and_symbols() {
        assert_eq!(
            search_url("mr. mime"),
            "https://pokestop.cl/search/?q=mr.+mime"
        );
    }
}
