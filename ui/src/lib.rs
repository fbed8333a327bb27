//! Shared UI crate for the belly button biodiversity dashboard. Data loading, chart
//! projection, and the Dioxus views live here; platform crates only launch.

use dioxus::prelude::*;

pub mod charts;
pub mod controller;
pub mod core;
pub mod render;
pub mod views;

pub mod components {
    mod app_header;
    pub use app_header::AppHeader;
}

/// Shared theme, linked by the web shell and embedded by desktop.
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Bundled survey dataset served next to the web build.
pub const SAMPLES_JSON: Asset = asset!("/assets/data/samples.json");
