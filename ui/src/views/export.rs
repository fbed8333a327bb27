use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    controller::DashboardView,
    core::export::{
        copy_text, deliver, encode_csv, export_filename, Delivery, ExportError, ExportFormat,
    },
};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Export the selected subject's projected data as JSON or CSV.
#[component]
pub fn ExportPanel(view: DashboardView) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);

    let feedback = match &*status.read() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "export-panel__status export-panel__status--success",
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export-panel__status export-panel__status--error",
            format!("⚠️ {err}"),
        )),
    };

    let json_handler = {
        let view = view.clone();
        move |_| status.set(into_status(perform_json_export(&view)))
    };
    let csv_handler = {
        let view = view.clone();
        move |_| status.set(into_status(perform_csv_export(&view)))
    };

    rsx! {
        section { class: "export-panel",
            h2 { class: "export-panel__title", "Export subject {view.subject}" }
            div { class: "export-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: json_handler,
                    "Export JSON"
                }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: csv_handler,
                    "Export CSV"
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn into_status(outcome: Result<String, ExportError>) -> ExportStatus {
    match outcome {
        Ok(message) => ExportStatus::Done(message),
        Err(err) => ExportStatus::Error(err.to_string()),
    }
}

fn perform_json_export(view: &DashboardView) -> Result<String, ExportError> {
    let json = build_json(view)?;
    let copied = copy_text(&json).is_ok();
    let filename = export_filename(&view.subject, ExportFormat::Json, OffsetDateTime::now_utc());
    let delivery = deliver(&filename, ExportFormat::Json, json.as_bytes())?;
    let prefix = if copied { "JSON copied and" } else { "JSON" };
    Ok(format!("{prefix} {}", describe(&delivery)))
}

fn perform_csv_export(view: &DashboardView) -> Result<String, ExportError> {
    let csv = build_csv(view);
    let filename = export_filename(&view.subject, ExportFormat::Csv, OffsetDateTime::now_utc());
    let delivery = deliver(&filename, ExportFormat::Csv, csv.as_bytes())?;
    Ok(format!("CSV {}", describe(&delivery)))
}

fn describe(delivery: &Delivery) -> String {
    match delivery {
        Delivery::Downloaded => "downloaded".to_string(),
        #[cfg(not(target_arch = "wasm32"))]
        Delivery::Saved(path) => format!("saved to {}", path.display()),
    }
}

fn build_json(view: &DashboardView) -> Result<String, ExportError> {
    serde_json::to_string_pretty(view).map_err(|err| ExportError::Encode(err.to_string()))
}

/// Metadata as `field,value` rows, a blank line, then every OTU in sample order.
fn build_csv(view: &DashboardView) -> String {
    let metadata = view.table.rows.iter().map(|row| {
        vec![
            row.label.trim_end_matches(':').to_string(),
            row.value.to_string(),
        ]
    });
    let otus = view
        .bubble
        .x
        .iter()
        .zip(&view.bubble.text)
        .zip(&view.bubble.y)
        .map(|((id, label), value)| vec![id.to_string(), label.clone(), value.to_string()]);

    let records = std::iter::once(vec!["field".to_string(), "value".to_string()])
        .chain(metadata)
        .chain([
            Vec::new(),
            vec![
                "otu_id".to_string(),
                "otu_label".to_string(),
                "sample_value".to_string(),
            ],
        ])
        .chain(otus);
    encode_csv(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        charts::{project_bar_chart, project_bubble_chart, project_gauge_chart, project_table},
        core::{MetadataRecord, MetadataValue, SampleRecord},
    };

    fn view() -> DashboardView {
        let metadata = MetadataRecord::new([
            ("id", MetadataValue::Number(940.0)),
            ("location", MetadataValue::Text("Beaufort/NC".into())),
            ("wfreq", MetadataValue::Missing),
        ]);
        let sample = SampleRecord {
            id: "940".into(),
            otu_ids: vec![1167, 2859],
            otu_labels: vec!["Bacteria;Bacteroidetes".into(), "Bacteria, \"Firmicutes\"".into()],
            sample_values: vec![163.0, 126.5],
        };
        DashboardView {
            subject: "940".into(),
            table: project_table(&metadata),
            bar: project_bar_chart(&sample),
            bubble: project_bubble_chart(&sample),
            gauge: project_gauge_chart(&metadata, 2.0),
        }
    }

    #[test]
    fn csv_lists_metadata_then_otus() {
        let csv = build_csv(&view());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "field,value",
                "id,940",
                "location,Beaufort/NC",
                "wfreq,",
                "",
                "otu_id,otu_label,sample_value",
                "1167,Bacteria;Bacteroidetes,163",
                "2859,\"Bacteria, \"\"Firmicutes\"\"\",126.5",
            ]
        );
    }

    #[test]
    fn json_keeps_metadata_order() {
        let json = build_json(&view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subject"], "940");
        assert_eq!(value["table"]["rows"][1]["label"], "location:");
        assert_eq!(value["gauge"]["value"], serde_json::Value::Null);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn deliveries_read_as_status_lines() {
        assert_eq!(describe(&Delivery::Downloaded), "downloaded");
        assert_eq!(
            describe(&Delivery::Saved("/tmp/out.csv".into())),
            "saved to /tmp/out.csv"
        );
    }
}
