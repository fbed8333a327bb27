#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
#[cfg(feature = "desktop")]
use dioxus::logger::tracing::warn;
use dioxus::{logger::tracing::Level, prelude::*};

use ui::components::AppHeader;
#[cfg(feature = "desktop")]
use ui::core::DatasetLocation;
use ui::core::DashboardConfig;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/subject/:id")]
    Subject { id: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

/// Optional overrides read from the resource directory.
#[cfg(feature = "desktop")]
const CONFIG_FILE: &str = "dashboard.json";

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialised once at startup");
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "Belly Button Biodiversity – v{}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir.clone()),
        )
        .with_context(desktop_config(&resource_dir))
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialised once at startup");
    LaunchBuilder::server()
        .with_context(DashboardConfig::default())
        .launch(App);
}

/// Dataset compiled into the binary, overlaid with `dashboard.json` from the resource
/// directory if present (e.g. `{"dataset": {"kind": "file", "target": "..."}}`).
#[cfg(feature = "desktop")]
fn desktop_config(resource_dir: &std::path::Path) -> DashboardConfig {
    let base = DashboardConfig::default().with_dataset(DatasetLocation::Embedded);
    match base.clone().overlay_file(&resource_dir.join(CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "ignoring unreadable dashboard config");
            base
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[component]
fn Home() -> Element {
    let config = use_context::<DashboardConfig>();
    rsx! {
        Dashboard { config }
    }
}

#[component]
fn Subject(id: String) -> Element {
    let config = use_context::<DashboardConfig>();
    rsx! {
        Dashboard { config, initial_subject: id }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load straight from the shared ui assets.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: shared header above the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader { }

        Outlet::<Route> {}
    }
}

#[cfg(all(test, feature = "desktop"))]
mod tests {
    use super::*;

    #[test]
    fn packaged_build_uses_embedded_dataset() {
        let config = desktop_config(std::path::Path::new("/no/such/resource/dir"));
        assert_eq!(config.dataset, DatasetLocation::Embedded);
    }

    #[test]
    fn dashboard_json_can_point_at_a_file() {
        let dir = std::env::temp_dir().join(format!("bbb-desktop-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILE),
            r#"{"dataset": {"kind": "file", "target": "/srv/bbb/samples.json"}}"#,
        )
        .unwrap();

        let config = desktop_config(&dir);
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(
            config.dataset,
            DatasetLocation::File("/srv/bbb/samples.json".into())
        );
    }
}
