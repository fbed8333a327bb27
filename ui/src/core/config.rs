//! Dashboard configuration. Every field has a default, so an empty JSON object is a
//! valid config file.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Relative URL the web build fetches when nothing else is configured.
pub const DEFAULT_DATASET_URL: &str = "data/samples.json";
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const DEFAULT_TITLE: &str = "Belly Button Biodiversity Dashboard";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset: DatasetLocation,
    pub plotly_src: String,
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetLocation::default(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn with_dataset(mut self, dataset: DatasetLocation) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Apply the top-level keys present in `raw` on top of `self`.
    pub fn overlay_json(self, raw: &str) -> Result<Self, serde_json::Error> {
        let patch: serde_json::Value = serde_json::from_str(raw)?;
        let mut merged = serde_json::to_value(&self)?;
        if let (Some(base), Some(patch)) = (merged.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(merged)
    }

    /// Overlay a config file if it exists. A missing file keeps `self`; an unreadable
    /// or invalid one is reported so the caller can decide whether to continue.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn overlay_file(self, path: &std::path::Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(raw) => self
                .overlay_json(&raw)
                .map_err(|err| format!("{}: {err}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(self),
            Err(err) => Err(format!("{}: {err}", path.display())),
        }
    }
}

/// Where the dataset document lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum DatasetLocation {
    Url(String),
    File(PathBuf),
    /// The survey dataset compiled into the binary.
    Embedded,
}

impl Default for DatasetLocation {
    fn default() -> Self {
        Self::Url(DEFAULT_DATASET_URL.to_string())
    }
}

impl fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => f.write_str("embedded dataset"),
        }
    }
}
