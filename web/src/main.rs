use dioxus::{logger::tracing::Level, prelude::*};

use ui::components::AppHeader;
use ui::core::{DashboardConfig, DatasetLocation};
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/subject/:id")]
    Subject { id: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialised once at startup");
    dioxus::launch(App);
}

fn web_config() -> DashboardConfig {
    DashboardConfig::default().with_dataset(DatasetLocation::Url(ui::SAMPLES_JSON.to_string()))
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Dashboard { config: web_config() }
    }
}

#[component]
fn Subject(id: String) -> Element {
    rsx! {
        Dashboard { config: web_config(), initial_subject: id }
    }
}

/// Web layout: shared header above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
