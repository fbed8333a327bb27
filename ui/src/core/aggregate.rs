//! Dataset-wide aggregates shown alongside the per-subject gauge.

use super::{dataset::Dataset, error::DashboardError};

/// Round to the nearest multiple of 0.5, halves away from zero.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Mean washing frequency across every metadata record, rounded to the nearest half.
///
/// Records with a blank `wfreq` count as zero but still count towards the divisor.
/// Values are summed in ascending order so the result doesn't depend on record order.
pub fn average_wash_frequency(dataset: &Dataset) -> Result<f64, DashboardError> {
    if dataset.metadata.is_empty() {
        return Err(DashboardError::EmptyDataset);
    }

    let mut washes: Vec<f64> = dataset
        .metadata
        .iter()
        .map(|record| record.wash_frequency().unwrap_or(0.0))
        .collect();
    washes.sort_by(f64::total_cmp);

    let mean = washes.iter().sum::<f64>() / washes.len() as f64;
    Ok(round_to_half(mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{MetadataRecord, MetadataValue};

    fn record(id: f64, wfreq: MetadataValue) -> MetadataRecord {
        MetadataRecord::new([("id", MetadataValue::Number(id)), ("wfreq", wfreq)])
    }

    #[test]
    fn averages_and_rounds() {
        let dataset = Dataset {
            names: vec!["940".into(), "941".into()],
            metadata: vec![
                record(940.0, MetadataValue::Number(2.0)),
                record(941.0, MetadataValue::Number(4.0)),
            ],
            samples: Vec::new(),
        };
        assert_eq!(average_wash_frequency(&dataset).unwrap(), 3.0);
    }

    #[test]
    fn blank_frequency_counts_as_zero() {
        let dataset = Dataset {
            metadata: vec![
                record(1.0, MetadataValue::Number(3.0)),
                record(2.0, MetadataValue::Missing),
            ],
            ..Dataset::default()
        };
        assert_eq!(average_wash_frequency(&dataset).unwrap(), 1.5);
    }

    #[test]
    fn empty_metadata_is_an_error() {
        assert_eq!(
            average_wash_frequency(&Dataset::default()),
            Err(DashboardError::EmptyDataset)
        );
    }

    #[test]
    fn rounds_to_nearest_half() {
        assert_eq!(round_to_half(2.2), 2.0);
        assert_eq!(round_to_half(2.3), 2.5);
        assert_eq!(round_to_half(2.75), 3.0);
        assert_eq!(round_to_half(-0.25), -0.5);
    }
}
