use dioxus::{logger::tracing::debug, prelude::*};

use crate::{
    controller::{PageController, PageState},
    core::{DashboardConfig, DatasetLoader, DatasetSource},
    render::{PlotlyRenderer, Region},
    views::{ExportPanel, MetadataTable, SubjectSelect},
};

/// The whole dashboard page. `initial_subject` comes from a `/subject/:id` deep link.
#[component]
pub fn Dashboard(config: DashboardConfig, initial_subject: Option<String>) -> Element {
    let mut controller = use_signal(|| PageController::new(PlotlyRenderer));

    let location = config.dataset.clone();
    use_future(move || {
        let mut controller = controller;
        let loader = DatasetSource::new(location.clone());
        let initial_subject = initial_subject.clone();
        async move {
            let result = loader.load().await;
            // Failures are kept as the controller's visible error.
            let _ = controller
                .with_mut(|ctl| ctl.finish_loading_with(result, initial_subject.as_deref()));
        }
    });

    let on_select = move |evt: FormEvent| {
        let subject = evt.value();
        debug!(%subject, "subject changed");
        let _ = controller.write().select(&subject);
    };

    let ctl = controller.read();
    let options = ctl.selector().options().to_vec();
    let selected = ctl.selector().selected().unwrap_or_default().to_string();
    let loading = matches!(ctl.state(), PageState::Loading { error: None });
    let error = ctl.last_error().map(ToString::to_string);
    let view = ctl.view().cloned();
    drop(ctl);

    rsx! {
        document::Script { src: "{config.plotly_src}" }

        section { class: "page page-dashboard",
            h1 { "{config.title}" }
            p {
                "Choose a test subject to see their demographics, most abundant microbial taxa, and washing frequency."
            }

            if let Some(message) = error {
                p { class: "dashboard__notice dashboard__notice--error", role: "alert", "⚠️ {message}" }
            }
            if loading {
                p { class: "dashboard__notice", "Loading survey data…" }
            }

            div { class: "dashboard__grid",
                aside { class: "dashboard-card dashboard__sidebar",
                    SubjectSelect { options, selected, onchange: on_select }
                    section { class: "metadata-panel",
                        h2 { class: "metadata-panel__title", "Demographic Info" }
                        div { id: Region::Table.element_id(),
                            if let Some(view) = view.as_ref() {
                                MetadataTable { rows: view.table.clone() }
                            } else {
                                p { class: "metadata-panel__placeholder", "No subject selected yet." }
                            }
                        }
                    }
                    if let Some(view) = view {
                        ExportPanel { view }
                    } else {
                        p { class: "export-panel__placeholder", "Exports unlock once a subject is shown." }
                    }
                }

                div { class: "dashboard-card dashboard__chart",
                    div { id: Region::Bar.element_id() }
                }
                div { class: "dashboard-card dashboard__chart",
                    div { id: Region::Gauge.element_id() }
                }
                div { class: "dashboard-card dashboard__chart dashboard__chart--wide",
                    div { id: Region::Bubble.element_id() }
                }
            }
        }
    }
}
