use serde::Serialize;
use serde_json::json;

use super::{title_font, Figure};
use crate::core::SampleRecord;

pub const BAR_TITLE: &str = "Top 10 OTUs for Selected Subject";
pub const TOP_OTU_COUNT: usize = 10;

/// Horizontal bar input. Entries run lowest to highest so Plotly, which paints the
/// first category at the bottom, puts the most abundant OTU on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarSpec {
    pub values: Vec<f64>,
    pub categories: Vec<String>,
    pub labels: Vec<String>,
}

pub fn project_bar_chart(sample: &SampleRecord) -> BarSpec {
    let n = sample.len().min(TOP_OTU_COUNT);

    BarSpec {
        values: sample.sample_values[..n].iter().rev().copied().collect(),
        categories: sample.otu_ids[..n]
            .iter()
            .rev()
            .map(|id| format!("OTU {id}"))
            .collect(),
        labels: sample.otu_labels[..n].iter().rev().cloned().collect(),
    }
}

impl BarSpec {
    pub fn figure(&self) -> Figure {
        Figure {
            data: vec![json!({
                "x": self.values,
                "y": self.categories,
                "type": "bar",
                "orientation": "h",
                "text": self.labels,
            })],
            layout: json!({
                "title": BAR_TITLE,
                "font": title_font(),
            }),
        }
    }
}
