use finder_core::model::{Record, RecordId, Region, TagName};
use services::InMemorySource;

use super::test_harness::setup_view_harness;

fn record(id: u32, name: &str, tags: &[&str]) -> Record {
    Record::with_primary_image(
        RecordId::new(id).unwrap(),
        name,
        tags.iter().map(|t| TagName::new(*t).unwrap()).collect(),
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn finder_view_smoke_shows_loader_then_grid() {
    let source = InMemorySource::with_records([
        record(1, "bulbasaur", &["grass", "poison"]),
        record(4, "charmander", &["fire"]),
    ]);
    source.set_tags(vec![
        TagName::new("fire").unwrap(),
        TagName::new("grass").unwrap(),
        TagName::new("shadow").unwrap(),
    ]);
    let mut harness = setup_view_harness(Region::Kanto, source);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Card Finder"), "missing title in {html}");

    let html = harness
        .drive_until(|html| html.contains("charmander") && !html.contains("loading-more"))
        .await;
    assert!(html.contains("bulbasaur"), "missing record in {html}");
    assert!(html.contains("#001"), "missing number in {html}");
    // Ids without a stored record render as fallback tiles.
    assert!(html.contains("#151"), "missing fallback tile in {html}");
    assert!(!html.contains("loading-container"), "loader still shown in {html}");
    assert!(html.contains("Filter by fire"), "missing tag chip in {html}");
    assert!(!html.contains("Filter by shadow"), "hidden tag shown in {html}");
    assert!(harness.source.requests().len() >= 151);
}

#[tokio::test(flavor = "current_thread")]
async fn finder_view_smoke_loads_only_selected_region() {
    let source = InMemorySource::with_records([record(152, "chikorita", &["grass"])]);
    let mut harness = setup_view_harness(Region::Johto, source);

    harness.rebuild();
    let html = harness.drive_until(|html| html.contains("chikorita")).await;
    assert!(html.contains("chikorita"), "missing record in {html}");
    assert!(!html.contains("#001"), "record outside region in {html}");

    let (start, end) = Region::Johto.bounds();
    let requested: Vec<u32> = harness.source.requests().iter().map(|id| id.value()).collect();
    assert!(requested.iter().all(|id| (start..=end).contains(id)));
}
