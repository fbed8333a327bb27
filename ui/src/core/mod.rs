//! Data model and the pure logic behind the dashboard: loading, subject selection,
//! record lookup, and aggregates.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod loader;
pub mod resolver;
pub mod selector;

pub use aggregate::{average_wash_frequency, round_to_half};
pub use config::{DashboardConfig, DatasetLocation};
pub use dataset::{Dataset, MetadataRecord, MetadataValue, SampleRecord, SubjectId};
pub use error::{Collection, DashboardError, LoadError};
pub use loader::{DatasetLoader, DatasetSource, StaticLoader, BUNDLED_DATASET};
pub use resolver::{resolve_metadata, resolve_sample};
pub use selector::SubjectSelector;
