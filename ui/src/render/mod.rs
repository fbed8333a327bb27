//! Chart drawing seam. The controller hands finished figures to a [`ChartRenderer`]
//! and never looks at what drawing returns.

mod plotly;
pub use plotly::{plotly_script, PlotlyRenderer};

use crate::charts::Figure;

/// Page regions, addressed by fixed element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Table,
    Bar,
    Bubble,
    Gauge,
}

impl Region {
    pub const CHARTS: [Region; 3] = [Region::Bar, Region::Bubble, Region::Gauge];

    pub fn element_id(self) -> &'static str {
        match self {
            Self::Table => "sample-metadata",
            Self::Bar => "bar",
            Self::Bubble => "bubble",
            Self::Gauge => "gauge",
        }
    }
}

pub trait ChartRenderer {
    fn draw(&mut self, region: Region, figure: &Figure);
}

/// Renderer that only remembers its calls. Useful wherever no DOM exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingRenderer {
    /// Every draw, in call order.
    pub calls: Vec<(Region, Figure)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest figure drawn into `region`.
    pub fn current(&self, region: Region) -> Option<&Figure> {
        self.calls
            .iter()
            .rev()
            .find(|(r, _)| *r == region)
            .map(|(_, figure)| figure)
    }

    pub fn draws(&self, region: Region) -> usize {
        self.calls.iter().filter(|(r, _)| *r == region).count()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn draw(&mut self, region: Region, figure: &Figure) {
        self.calls.push((region, figure.clone()));
    }
}
