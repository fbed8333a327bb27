use serde::Serialize;

use crate::core::{MetadataRecord, MetadataValue};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Field name followed by a colon, e.g. `"age:"`.
    pub label: String,
    pub value: MetadataValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableSpec {
    pub rows: Vec<TableRow>,
}

/// One row per metadata field, in the record's own order.
pub fn project_table(record: &MetadataRecord) -> TableSpec {
    TableSpec {
        rows: record
            .fields()
            .iter()
            .map(|(key, value)| TableRow {
                label: format!("{key}:"),
                value: value.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_each_field_in_order() {
        let record = MetadataRecord::new([
            ("id", MetadataValue::Number(940.0)),
            ("ethnicity", MetadataValue::Text("Caucasian".into())),
            ("wfreq", MetadataValue::Missing),
        ]);

        let table = project_table(&record);
        let labels: Vec<&str> = table.rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["id:", "ethnicity:", "wfreq:"]);
        assert_eq!(table.rows[1].value, MetadataValue::Text("Caucasian".into()));
        assert_eq!(table.rows[2].value, MetadataValue::Missing);
    }
}
