use dioxus::prelude::*;
use finder_core::model::{Region, TagName};

use crate::vm::{TileVm, TypeChipVm};

#[component]
pub fn Controls(
    search: String,
    region: Region,
    on_search: EventHandler<String>,
    on_region: EventHandler<Region>,
) -> Element {
    rsx! {
        div { class: "header-controls",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search…",
                aria_label: "Search by name",
                value: "{search}",
                oninput: move |evt: FormEvent| on_search.call(evt.value()),
            }
            select {
                class: "region-select",
                aria_label: "Select region",
                value: "{region}",
                onchange: move |evt: FormEvent| {
                    if let Ok(region) = evt.value().parse::<Region>() {
                        on_region.call(region);
                    }
                },
                for option_region in Region::ALL {
                    option {
                        key: "{option_region}",
                        value: "{option_region}",
                        selected: option_region == region,
                        "{option_region}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TypeChips(chips: Vec<TypeChipVm>, on_toggle: EventHandler<TagName>) -> Element {
    rsx! {
        div { class: "type-chips", role: "toolbar", aria_label: "Type filters",
            div { class: "chips-row",
                for chip in chips {
                    TypeChip { key: "{chip.label}", chip: chip.clone(), on_toggle }
                }
            }
        }
    }
}

#[component]
fn TypeChip(chip: TypeChipVm, on_toggle: EventHandler<TagName>) -> Element {
    let class = if chip.active { "chip chip-active" } else { "chip" };
    let tag = chip.tag.clone();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "Filter by {chip.label}",
            aria_label: "Filter by type {chip.label}",
            aria_pressed: "{chip.active}",
            onclick: move |_| on_toggle.call(tag.clone()),
            if let Some(icon) = chip.icon_url {
                img { src: "{icon}", alt: "{chip.label}" }
            } else {
                span { class: "chip-label", "{chip.label}" }
            }
        }
    }
}

#[component]
pub fn TileGrid(tiles: Vec<TileVm>, loading_more: bool) -> Element {
    rsx! {
        div { class: "pokemon-grid", role: "list",
            for tile in tiles {
                Tile { key: "{tile.id}", tile: tile.clone() }
            }
            if loading_more {
                div { class: "loading-more",
                    div { class: "spinner" }
                }
            }
        }
    }
}

#[component]
fn Tile(tile: TileVm) -> Element {
    let mut image_failed = use_signal(|| false);
    let src = if image_failed() {
        tile.fallback_image.clone()
    } else {
        tile.image.clone()
    };

    rsx! {
        a {
            class: "pokemon-tile",
            role: "listitem",
            href: "{tile.search_url}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "pokemon-number", "{tile.number}" }
            img {
                src: "{src}",
                alt: "{tile.name}",
                onerror: move |_| image_failed.set(true),
            }
            div { class: "pokemon-name", style: "background: {tile.background}", "{tile.name}" }
        }
    }
}

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-container",
            div { class: "pokeball-loader" }
            div { class: "loading-text", "Loading catalog…" }
        }
    }
}
