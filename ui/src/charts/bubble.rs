use serde::Serialize;
use serde_json::json;

use super::{title_font, Figure};
use crate::core::SampleRecord;

pub const BUBBLE_TITLE: &str = "All Samples for Selected Subject";

/// Every OTU in sample order: x is the OTU id, y and marker size the abundance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BubbleSpec {
    pub x: Vec<u32>,
    pub y: Vec<f64>,
    pub marker_size: Vec<f64>,
    pub marker_color: Vec<u32>,
    pub text: Vec<String>,
}

pub fn project_bubble_chart(sample: &SampleRecord) -> BubbleSpec {
    BubbleSpec {
        x: sample.otu_ids.clone(),
        y: sample.sample_values.clone(),
        marker_size: sample.sample_values.clone(),
        marker_color: sample.otu_ids.clone(),
        text: sample.otu_labels.clone(),
    }
}

impl BubbleSpec {
    pub fn figure(&self) -> Figure {
        Figure {
            data: vec![json!({
                "x": self.x,
                "y": self.y,
                "mode": "markers",
                "marker": {
                    "color": self.marker_color,
                    "size": self.marker_size,
                },
                "text": self.text,
            })],
            layout: json!({
                "title": BUBBLE_TITLE,
                "font": title_font(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_otu_without_reordering() {
        let sample = SampleRecord {
            id: "941".into(),
            otu_ids: vec![1167, 2859, 482],
            otu_labels: vec!["a".into(), "b".into(), "c".into()],
            sample_values: vec![163.0, 126.0, 113.0],
        };

        let bubble = project_bubble_chart(&sample);
        assert_eq!(bubble.x, sample.otu_ids);
        assert_eq!(bubble.marker_color, sample.otu_ids);
        assert_eq!(bubble.y, sample.sample_values);
        assert_eq!(bubble.marker_size, sample.sample_values);
        assert_eq!(bubble.text, sample.otu_labels);
    }

    #[test]
    fn figure_uses_marker_mode() {
        let figure = project_bubble_chart(&SampleRecord::default()).figure();
        assert_eq!(figure.data[0]["mode"], "markers");
        assert_eq!(figure.layout["title"], BUBBLE_TITLE);
        assert_eq!(figure.layout["font"]["family"], "Arial");
    }
}
