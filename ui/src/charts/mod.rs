//! View projectors: pure transforms from resolved records into chart inputs.
//!
//! Each spec can be turned into a Plotly [`Figure`]; the table is drawn natively.

mod bar;
pub use bar::{project_bar_chart, BarSpec, BAR_TITLE, TOP_OTU_COUNT};

mod bubble;
pub use bubble::{project_bubble_chart, BubbleSpec, BUBBLE_TITLE};

mod gauge;
pub use gauge::{project_gauge_chart, GaugeBand, GaugeSpec, GAUGE_BAND_COLORS, GAUGE_MAX};

mod table;
pub use table::{project_table, TableRow, TableSpec};

use serde::Serialize;
use serde_json::{json, Value};

/// A trace list plus layout, shaped the way `Plotly.newPlot` takes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// Title font shared by every chart.
pub(crate) fn title_font() -> Value {
    json!({
        "family": "Arial",
        "size": 14,
        "color": "black",
    })
}
