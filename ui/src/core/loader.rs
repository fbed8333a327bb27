//! Dataset loading. Native builds read from disk, wasm builds go through `fetch`.

use std::{borrow::Cow, future::Future};

use dioxus::logger::tracing::{debug, info};

use super::{config::DatasetLocation, dataset::Dataset, error::LoadError};

/// The survey dataset shipped with the app. Desktop builds load this by default, so a
/// packaged binary needs no data files next to it.
pub const BUNDLED_DATASET: &[u8] = include_bytes!("../../assets/data/samples.json");

/// Anything that can produce a fresh dataset snapshot. Every call re-reads the source.
pub trait DatasetLoader {
    fn load(&self) -> impl Future<Output = Result<Dataset, LoadError>>;
}

/// Loader driven by the configured [`DatasetLocation`].
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSource {
    location: DatasetLocation,
}

impl DatasetSource {
    pub fn new(location: DatasetLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &DatasetLocation {
        &self.location
    }
}

impl DatasetLoader for DatasetSource {
    async fn load(&self) -> Result<Dataset, LoadError> {
        let bytes: Cow<'_, [u8]> = match &self.location {
            DatasetLocation::Url(url) => fetch_bytes(url).await?.into(),
            DatasetLocation::File(path) => read_file(path).await?.into(),
            DatasetLocation::Embedded => BUNDLED_DATASET.into(),
        };
        debug!(bytes = bytes.len(), location = %self.location, "dataset fetched");

        let dataset = Dataset::from_json_slice(&bytes)?;
        info!(
            subjects = dataset.names.len(),
            metadata = dataset.metadata.len(),
            samples = dataset.samples.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

/// Loader over bytes already in memory (embedded data, tests).
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLoader {
    bytes: Vec<u8>,
}

impl StaticLoader {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Loader over [`BUNDLED_DATASET`].
    pub fn bundled() -> Self {
        Self::new(BUNDLED_DATASET)
    }
}

impl DatasetLoader for StaticLoader {
    async fn load(&self) -> Result<Dataset, LoadError> {
        Dataset::from_json_slice(&self.bytes)
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let failed = |reason: String| LoadError::Unreachable {
        location: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| failed("window unavailable".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| failed(format!("{err:?}")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| failed("fetch returned a non-Response value".into()))?;
    if !response.ok() {
        return Err(failed(format!("HTTP {}", response.status())));
    }

    let body = response
        .array_buffer()
        .map_err(|err| failed(format!("{err:?}")))?;
    let buffer = JsFuture::from(body)
        .await
        .map_err(|err| failed(format!("{err:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    Err(LoadError::Unreachable {
        location: url.to_string(),
        reason: "URL datasets are only available in the web build".to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file(path: &std::path::Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path)
        .await
        .map_err(|err| LoadError::Unreachable {
            location: path.display().to_string(),
            reason: err.to_string(),
        })
}

#[cfg(target_arch = "wasm32")]
async fn read_file(path: &std::path::Path) -> Result<Vec<u8>, LoadError> {
    Err(LoadError::Unreachable {
        location: path.display().to_string(),
        reason: "file datasets are only available in native builds".to_string(),
    })
}
