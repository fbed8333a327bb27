//! Survey dataset model: subject names, per-subject metadata, and OTU samples.

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use super::error::LoadError;

/// Subject identifier as it appears in `names` and the selector.
pub type SubjectId = String;

/// Top-level keys every dataset document must carry.
pub const REQUIRED_KEYS: [&str; 3] = ["names", "metadata", "samples"];

/// The whole survey document. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub names: Vec<SubjectId>,
    pub metadata: Vec<MetadataRecord>,
    pub samples: Vec<SampleRecord>,
}

impl Dataset {
    /// Parse a raw JSON document, checking the top-level keys and record shapes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|err| LoadError::Malformed(err.to_string()))?;

        let object = value.as_object().ok_or_else(|| {
            LoadError::Malformed("expected a JSON object at the top level".to_string())
        })?;
        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(LoadError::MissingKey(missing));
        }

        let dataset: Dataset =
            serde_json::from_value(value).map_err(|err| LoadError::Malformed(err.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), LoadError> {
        for (index, record) in self.metadata.iter().enumerate() {
            let invalid = |reason: &str| LoadError::InvalidMetadata {
                index,
                reason: reason.to_string(),
            };
            match record.get("id") {
                Some(MetadataValue::Number(_)) => {}
                Some(_) => return Err(invalid("`id` must be numeric")),
                None => return Err(invalid("missing `id`")),
            }
            match record.get("wfreq") {
                Some(MetadataValue::Number(_)) | Some(MetadataValue::Missing) => {}
                Some(_) => return Err(invalid("`wfreq` must be numeric or null")),
                None => return Err(invalid("missing `wfreq`")),
            }
        }

        for (index, sample) in self.samples.iter().enumerate() {
            let n = sample.otu_ids.len();
            if sample.otu_labels.len() != n || sample.sample_values.len() != n {
                return Err(LoadError::InvalidSample {
                    index,
                    id: sample.id.clone(),
                    reason: format!(
                        "parallel arrays differ in length (otu_ids={n}, otu_labels={}, sample_values={})",
                        sample.otu_labels.len(),
                        sample.sample_values.len()
                    ),
                });
            }
        }

        Ok(())
    }
}

/// One scalar metadata value. `null` in the source becomes `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
    Flag(bool),
    Missing,
}

impl MetadataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Missing => Ok(()),
        }
    }
}

/// Per-subject attributes in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRecord {
    fields: Vec<(String, MetadataValue)>,
}

impl MetadataRecord {
    pub fn new<K: Into<String>>(fields: impl IntoIterator<Item = (K, MetadataValue)>) -> Self {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn fields(&self) -> &[(String, MetadataValue)] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn id(&self) -> Option<f64> {
        self.get("id").and_then(MetadataValue::as_number)
    }

    /// Washing frequency per week; `None` when the survey left it blank.
    pub fn wash_frequency(&self) -> Option<f64> {
        self.get("wfreq").and_then(MetadataValue::as_number)
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MetadataRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = MetadataRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a metadata object of scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, MetadataValue>()? {
                    fields.push(entry);
                }
                Ok(MetadataRecord { fields })
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// OTU abundances for one subject. The three arrays are parallel and sorted by
/// `sample_values`, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub id: SubjectId,
    pub otu_ids: Vec<u32>,
    pub otu_labels: Vec<String>,
    pub sample_values: Vec<f64>,
}

impl SampleRecord {
    pub fn len(&self) -> usize {
        self.otu_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.otu_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "names": ["940"],
        "metadata": [{"id": 940, "ethnicity": "Caucasian", "gender": "F", "age": 24.0, "wfreq": 2.0}],
        "samples": [{"id": "940", "otu_ids": [1167, 2859], "otu_labels": ["a", "b"], "sample_values": [163, 126]}]
    }"#;

    #[test]
    fn parses_well_formed_document() {
        let dataset = Dataset::from_json_slice(DOC.as_bytes()).unwrap();
        assert_eq!(dataset.names, vec!["940".to_string()]);
        assert_eq!(dataset.metadata[0].id(), Some(940.0));
        assert_eq!(dataset.metadata[0].wash_frequency(), Some(2.0));
        assert_eq!(dataset.samples[0].len(), 2);
    }

    #[test]
    fn metadata_keeps_document_order() {
        let dataset = Dataset::from_json_slice(DOC.as_bytes()).unwrap();
        let keys: Vec<&str> = dataset.metadata[0]
            .fields()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["id", "ethnicity", "gender", "age", "wfreq"]);
    }

    #[test]
    fn null_wfreq_is_missing() {
        let doc = r#"{"names": [], "metadata": [{"id": 1, "wfreq": null}], "samples": []}"#;
        let dataset = Dataset::from_json_slice(doc.as_bytes()).unwrap();
        assert_eq!(dataset.metadata[0].get("wfreq"), Some(&MetadataValue::Missing));
        assert_eq!(dataset.metadata[0].wash_frequency(), None);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Dataset::from_json_slice(b"{not json").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn rejects_non_object_document() {
        let err = Dataset::from_json_slice(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn reports_missing_top_level_key() {
        let err = Dataset::from_json_slice(br#"{"names": [], "metadata": []}"#).unwrap_err();
        assert_eq!(err, LoadError::MissingKey("samples"));
    }

    #[test]
    fn rejects_textual_metadata_id() {
        let doc = r#"{"names": [], "metadata": [{"id": "940", "wfreq": 1}], "samples": []}"#;
        let err = Dataset::from_json_slice(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidMetadata { index: 0, .. }));
    }

    #[test]
    fn rejects_ragged_sample_arrays() {
        let doc = r#"{"names": [], "metadata": [], "samples": [
            {"id": "1", "otu_ids": [1, 2], "otu_labels": ["a"], "sample_values": [3, 2]}
        ]}"#;
        let err = Dataset::from_json_slice(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSample { index: 0, .. }));
    }

    #[test]
    fn display_matches_plain_text_rendering() {
        assert_eq!(MetadataValue::Number(24.0).to_string(), "24");
        assert_eq!(MetadataValue::Number(2.5).to_string(), "2.5");
        assert_eq!(MetadataValue::Text("Beaufort/NC".into()).to_string(), "Beaufort/NC");
        assert_eq!(MetadataValue::Missing.to_string(), "");
    }
}
