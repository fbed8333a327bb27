use serde::Serialize;
use serde_json::{json, Value};

use super::{title_font, Figure};
use crate::core::MetadataRecord;

/// Upper end of the washing-frequency dial.
pub const GAUGE_MAX: f64 = 9.0;

/// One colour per unit band, lightest at 0-1.
pub const GAUGE_BAND_COLORS: [&str; 9] = [
    "#DCDCDC", "#D3D3D3", "#C0C0C0", "#A9A9A9", "#808080", "#696969", "#778899", "#708090",
    "#2F4F4F",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub range: [f64; 2],
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    /// Subject's washes per week; `None` when the survey left it blank.
    pub value: Option<f64>,
    pub reference: f64,
    pub range: [f64; 2],
    pub bands: Vec<GaugeBand>,
    pub title: String,
}

pub fn project_gauge_chart(record: &MetadataRecord, avg_washes: f64) -> GaugeSpec {
    let bands = GAUGE_BAND_COLORS
        .iter()
        .copied()
        .enumerate()
        .map(|(i, color)| GaugeBand {
            range: [i as f64, i as f64 + 1.0],
            color,
        })
        .collect();

    GaugeSpec {
        value: record.wash_frequency(),
        reference: avg_washes,
        range: [0.0, GAUGE_MAX],
        bands,
        title: format!(
            "<b>Washing Frequency for Selected Subject</b><br>Dataset avg: {avg_washes}/per week"
        ),
    }
}

impl GaugeSpec {
    pub fn figure(&self) -> Figure {
        let steps: Vec<Value> = self
            .bands
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let mut step = json!({ "range": band.range, "color": band.color });
                if i == 0 {
                    step["text"] = json!("0-1");
                }
                step
            })
            .collect();

        Figure {
            data: vec![json!({
                "domain": { "x": [0, 1], "y": [0, 1] },
                "value": self.value,
                "title": { "text": self.title, "font": title_font() },
                "type": "indicator",
                "mode": "gauge+number+delta",
                "delta": { "reference": self.reference },
                "gauge": {
                    "axis": { "range": self.range },
                    "steps": steps,
                },
            })],
            layout: json!({
                "width": 800,
                "height": 650,
                "margin": { "t": 0, "b": 0 },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MetadataValue;

    fn record(wfreq: MetadataValue) -> MetadataRecord {
        MetadataRecord::new([("id", MetadataValue::Number(940.0)), ("wfreq", wfreq)])
    }

    #[test]
    fn gauge_compares_subject_to_average() {
        let gauge = project_gauge_chart(&record(MetadataValue::Number(2.0)), 2.5);
        assert_eq!(gauge.value, Some(2.0));
        assert_eq!(gauge.reference, 2.5);
        assert_eq!(gauge.range, [0.0, 9.0]);
        assert!(gauge.title.contains("Dataset avg: 2.5/per week"));
    }

    #[test]
    fn nine_unit_bands_cover_the_axis() {
        let gauge = project_gauge_chart(&record(MetadataValue::Number(1.0)), 3.0);
        assert_eq!(gauge.bands.len(), 9);
        for (i, band) in gauge.bands.iter().enumerate() {
            assert_eq!(band.range, [i as f64, i as f64 + 1.0]);
            assert_eq!(band.color, GAUGE_BAND_COLORS[i]);
        }
        assert!(gauge.title.ends_with("Dataset avg: 3/per week"));
    }

    #[test]
    fn blank_frequency_has_no_value() {
        let gauge = project_gauge_chart(&record(MetadataValue::Missing), 2.0);
        assert_eq!(gauge.value, None);
        assert_eq!(gauge.figure().data[0]["value"], Value::Null);
    }

    #[test]
    fn figure_carries_delta_and_steps() {
        let figure = project_gauge_chart(&record(MetadataValue::Number(6.0)), 2.0).figure();
        let trace = &figure.data[0];
        assert_eq!(trace["mode"], "gauge+number+delta");
        assert_eq!(trace["delta"]["reference"], 2.0);
        assert_eq!(trace["gauge"]["steps"][0]["text"], "0-1");
        assert_eq!(trace["gauge"]["steps"][8]["color"], "#2F4F4F");
        assert_eq!(figure.layout["height"], 650);
    }
}
