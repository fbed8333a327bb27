//! Error taxonomy for loading and rendering the dashboard.

use std::fmt;

use super::dataset::SubjectId;

/// Fetching or parsing the dataset failed. Fatal to page initialization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't read dataset from {location}: {reason}")]
    Unreachable { location: String, reason: String },
    #[error("dataset is not valid JSON: {0}")]
    Malformed(String),
    #[error("dataset is missing the top-level `{0}` key")]
    MissingKey(&'static str),
    #[error("metadata record #{index} is invalid: {reason}")]
    InvalidMetadata { index: usize, reason: String },
    #[error("sample record #{index} (id {id}) is invalid: {reason}")]
    InvalidSample {
        index: usize,
        id: SubjectId,
        reason: String,
    },
}

/// Which collection a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Metadata,
    Samples,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata => f.write_str("metadata"),
            Self::Samples => f.write_str("sample"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The selected subject is listed in `names` but has no record; the data is inconsistent.
    #[error("subject {subject} has no {collection} record in the dataset")]
    NotFound {
        subject: SubjectId,
        collection: Collection,
    },
    #[error("dataset has no metadata records, so the average washing frequency can't be computed")]
    EmptyDataset,
    #[error("subject {0} is not one of the available options")]
    UnknownSubject(SubjectId),
    #[error("dataset lists no subjects")]
    NoSubjects,
    #[error("dataset hasn't finished loading")]
    NotReady,
}

impl DashboardError {
    pub(crate) fn not_found(subject: &str, collection: Collection) -> Self {
        Self::NotFound {
            subject: subject.to_string(),
            collection,
        }
    }
}
