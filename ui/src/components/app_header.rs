use dioxus::prelude::*;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Page header shared by the web and desktop shells.
#[component]
pub fn AppHeader(subtitle: Option<String>) -> Element {
    let subtitle = subtitle.unwrap_or_else(|| "Microbial diversity survey".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        // Native release builds can't rely on the asset server, so inline the sheet.
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "app-header", class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-spark", aria_hidden: "true" }
                    span { class: "app-header__brand-mark", "Belly Button Biodiversity" }
                }
                span { class: "app-header__subtitle", "{subtitle}" }
            }
        }
    }
}
