use dioxus::prelude::*;

use crate::charts::TableSpec;

/// Demographic info for the selected subject, one field per row.
#[component]
pub fn MetadataTable(rows: TableSpec) -> Element {
    rsx! {
        table { class: "table table-striped table-hover table-responsive",
            tbody {
                for (i, row) in rows.rows.into_iter().enumerate() {
                    tr { key: "{i}",
                        th { "{row.label}" }
                        td { "{row.value}" }
                    }
                }
            }
        }
    }
}
