use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use finder_core::model::Region;
use services::{
    CatalogLoader, CatalogSessions, FinderConfig, FinderServices, InMemorySource, TagService,
};

use crate::context::{UiApp, build_app_context};
use crate::views::FinderView;

#[derive(Clone)]
struct TestApp {
    region: Region,
    services: FinderServices,
}

impl UiApp for TestApp {
    fn initial_region(&self) -> Region {
        self.region
    }

    fn loader(&self) -> Arc<CatalogLoader> {
        self.services.loader()
    }

    fn tags(&self) -> Arc<TagService> {
        self.services.tags()
    }

    fn sessions(&self) -> Arc<CatalogSessions> {
        self.services.sessions()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn FinderHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { FinderView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub source: InMemorySource,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until `done` holds for the rendered html or the attempts run out.
    pub async fn drive_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        for _ in 0..20 {
            let html = self.render();
            if done(&html) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(region: Region, source: InMemorySource) -> ViewHarness {
    let services = FinderServices::with_source(FinderConfig::default(), Arc::new(source.clone()));
    let app = Arc::new(TestApp { region, services });
    let dom = VirtualDom::new_with_props(FinderHarness, ViewHarnessProps { app });
    ViewHarness { dom, source }
}
