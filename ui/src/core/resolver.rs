//! Per-subject record lookup.
//!
//! Metadata ids are stored as numbers and sample ids as strings, so each collection
//! gets its own comparison: metadata lookups coerce the selected id to a number,
//! sample lookups compare the raw string.

use super::{
    dataset::{Dataset, MetadataRecord, SampleRecord},
    error::{Collection, DashboardError},
};

pub fn resolve_metadata<'a>(
    dataset: &'a Dataset,
    subject: &str,
) -> Result<&'a MetadataRecord, DashboardError> {
    coerce_numeric(subject)
        .and_then(|wanted| dataset.metadata.iter().find(|m| m.id() == Some(wanted)))
        .ok_or_else(|| DashboardError::not_found(subject, Collection::Metadata))
}

pub fn resolve_sample<'a>(
    dataset: &'a Dataset,
    subject: &str,
) -> Result<&'a SampleRecord, DashboardError> {
    dataset
        .samples
        .iter()
        .find(|s| s.id == subject)
        .ok_or_else(|| DashboardError::not_found(subject, Collection::Samples))
}

/// Unary-plus style coercion: surrounding whitespace is ignored, a blank string is
/// zero, and unsigned `0x`/`0o`/`0b` literals are read in their radix. Anything else
/// that doesn't parse to a finite number yields `None` and therefore never matches.
fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = trimmed.get(..2).and_then(|prefix| match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    });
    let value = match radix {
        Some(radix) => {
            let digits = &trimmed[2..];
            if !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            u64::from_str_radix(digits, radix).ok()? as f64
        }
        // `str::parse` also accepts "inf" and "infinity"; ids are always finite.
        None => trimmed.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}
