//! CSV ingestion and record validation

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::PricingRecord;

/// Errors raised while ingesting a pricing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing required column or unparsable field value
    #[error("malformed catalog: {0}")]
    Malformed(#[from] csv::Error),

    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
}

/// CSV row with the source data's exact column names.
///
/// Optional columns may be absent from the header or left empty per
/// row; both deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Provider")]
    provider: String,
    #[serde(rename = "Service")]
    service: String,
    #[serde(rename = "Instance Type")]
    instance_type: Option<String>,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Usage Type")]
    usage_type: String,
    #[serde(rename = "Price Per Unit")]
    price_per_unit: f64,
    #[serde(rename = "Units")]
    units: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Performance Score")]
    performance_score: Option<f64>,
    #[serde(rename = "Availability")]
    availability: Option<f64>,
    #[serde(rename = "Reserved Discount 1yr")]
    reserved_discount_1yr: Option<f64>,
    #[serde(rename = "Reserved Discount 3yr")]
    reserved_discount_3yr: Option<f64>,
}

impl From<RawRecord> for PricingRecord {
    fn from(raw: RawRecord) -> Self {
        PricingRecord {
            provider: raw.provider,
            service: raw.service,
            // An empty cell means "no instance type", not an empty name
            instance_type: raw.instance_type.filter(|s| !s.trim().is_empty()),
            region: raw.region,
            usage_type: raw.usage_type,
            price_per_unit: raw.price_per_unit,
            units: raw.units,
            currency: raw.currency,
            performance_score: raw.performance_score,
            availability: raw.availability,
            reserved_discount_1yr: raw.reserved_discount_1yr,
            reserved_discount_3yr: raw.reserved_discount_3yr,
        }
    }
}

/// Read and validate all records from a CSV file
pub(super) fn load_csv(path: &Path) -> Result<Vec<PricingRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for (idx, raw) in reader.deserialize::<RawRecord>().enumerate() {
        let record: PricingRecord = raw?.into();
        validate_record(idx + 1, &record)?;
        records.push(record);
    }

    Ok(records)
}

/// Validate one record against the schema invariants.
///
/// Negative prices and performance scores are rejected outright.
/// Reserved discounts outside [0, 100] are accepted but logged: the
/// calculator passes them through unclamped, so the resulting costs
/// can go negative.
pub(super) fn validate_record(row: usize, record: &PricingRecord) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecord { row, reason };

    for (name, value) in [
        ("Provider", &record.provider),
        ("Service", &record.service),
        ("Region", &record.region),
        ("Usage Type", &record.usage_type),
        ("Units", &record.units),
        ("Currency", &record.currency),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(format!("{} must not be empty", name)));
        }
    }

    if record.price_per_unit < 0.0 {
        return Err(invalid(format!(
            "Price Per Unit must be non-negative, got {}",
            record.price_per_unit
        )));
    }

    if let Some(score) = record.performance_score {
        if score < 0.0 {
            return Err(invalid(format!(
                "Performance Score must be non-negative, got {}",
                score
            )));
        }
    }

    for (name, discount) in [
        ("Reserved Discount 1yr", record.reserved_discount_1yr),
        ("Reserved Discount 3yr", record.reserved_discount_3yr),
    ] {
        if let Some(pct) = discount {
            if !(0.0..=100.0).contains(&pct) {
                tracing::warn!(
                    row,
                    provider = %record.provider,
                    service = %record.service,
                    "{} of {} is outside [0, 100]; final costs may be negative",
                    name,
                    pct
                );
            }
        }
    }

    Ok(())
}
