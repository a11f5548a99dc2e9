use dioxus::prelude::*;
use finder_core::model::{Record, Region, TagName};
use services::SinkError;
use tracing::error;

use crate::context::AppContext;
use crate::state::{FinderAction, FinderState};
use crate::views::components::{Controls, LoadingScreen, TileGrid, TypeChips};
use crate::vm::{map_tiles, map_type_chips};

#[component]
pub fn FinderView() -> Element {
    let ctx = use_context::<AppContext>();
    let region = ctx.initial_region();
    let state = use_signal(|| FinderState::new(region));

    let ctx_for_mount = ctx.clone();
    use_hook(move || {
        load_tags(&ctx_for_mount, state);
        load_region(&ctx_for_mount, state, region);
    });

    let sessions = ctx.sessions();
    use_drop(move || sessions.shutdown());

    let current = state.read();
    let tiles = map_tiles(&current.visible());
    let chips = map_type_chips(current.all_tags(), current.filter());
    let show_spinner = current.show_spinner();
    let loading_more = current.show_more_indicator();
    let search = current.filter().text().to_string();
    let selected_region = current.region();
    drop(current);

    rsx! {
        div { class: "pokedex",
            div { class: "pokedex-header",
                div { class: "lights",
                    div { class: "light red" }
                    div { class: "light yellow" }
                    div { class: "light green" }
                }
                h1 { class: "cardhunters-title", "Card Finder" }
                Controls {
                    search,
                    region: selected_region,
                    on_search: move |text: String| dispatch(state, FinderAction::SetSearch(text)),
                    on_region: move |region: Region| load_region(&ctx, state, region),
                }
                TypeChips {
                    chips,
                    on_toggle: move |tag: TagName| dispatch(state, FinderAction::ToggleTag(tag)),
                }
            }
            div { class: "pokedex-screen",
                if show_spinner {
                    LoadingScreen {}
                } else {
                    TileGrid { tiles, loading_more }
                }
            }
        }
    }
}

fn dispatch(mut state: Signal<FinderState>, action: FinderAction) {
    state.with_mut(|current| *current = std::mem::take(current).apply(action));
}

fn load_tags(ctx: &AppContext, state: Signal<FinderState>) {
    let tags = ctx.tags();
    spawn(async move {
        let all = tags.list_tags().await;
        dispatch(state, FinderAction::TagsLoaded(all));
    });
}

/// Start a new session for `region`; the previous one stops updating the grid.
fn load_region(ctx: &AppContext, state: Signal<FinderState>, region: Region) {
    let handle = ctx.sessions().begin(region);
    let loader = ctx.loader();

    spawn(async move {
        let session = handle.id();
        if !handle.is_live() {
            return;
        }
        dispatch(state, FinderAction::SelectRegion { region, session });

        let mut render = move |records: Vec<Record>| -> Result<(), SinkError> {
            dispatch(state, FinderAction::Progress { session, records });
            Ok(())
        };
        let result = {
            let mut guarded = handle.guard(&mut render);
            loader.load_region(region, &mut guarded).await
        };

        match result {
            Ok(records) => {
                handle.finish(records, |records| {
                    dispatch(state, FinderAction::Finished { session, records });
                });
            }
            Err(err) => {
                error!(%session, error = %err, "catalog load failed");
                handle.finish((), |()| dispatch(state, FinderAction::Failed { session }));
            }
        }
    });
}
