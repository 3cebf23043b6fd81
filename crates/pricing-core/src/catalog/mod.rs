//! Pricing catalog: the in-memory tabular dataset and its schema contract
//!
//! The catalog is loaded once (CSV file or built-in sample), validated
//! at ingestion, and read-only afterwards. Every computation engine
//! operates on slices of its records.

mod loader;
mod sample;


pub use loader::CatalogError;

use std::path::Path;

use crate::models::PricingRecord;

/// Default usage magnitude for storage-like units (GB)
const DEFAULT_USAGE_GB: f64 = 100.0;

/// Default usage magnitude for hourly units (a month of hours)
const DEFAULT_USAGE_HOURS: f64 = 730.0;

/// Default usage magnitude when the units give no hint
const DEFAULT_USAGE_OTHER: f64 = 10.0;

/// Immutable collection of pricing records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PricingRecord>,
}

impl Catalog {
    /// Build a catalog from already-typed records, validating each one.
    pub fn new(records: Vec<PricingRecord>) -> Result<Self, CatalogError> {
        for (idx, record) in records.iter().enumerate() {
            loader::validate_record(idx + 1, record)?;
        }
        Ok(Self { records })
    }

    /// Load and validate a catalog from a CSV file.
    ///
    /// The file must carry the full set of required columns; optional
    /// columns (instance type, performance score, availability,
    /// reserved discounts) may be missing entirely or left empty per
    /// row. A malformed file is the one fatal error in the system.
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let records = loader::load_csv(path)?;
        tracing::debug!(path = %path.display(), rows = records.len(), "Loaded pricing catalog");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PricingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct providers, sorted
    pub fn providers(&self) -> Vec<String> {
        self.distinct(|r| r.provider.clone())
    }

    /// Distinct service names, sorted
    pub fn services(&self) -> Vec<String> {
        self.distinct(|r| r.service.clone())
    }

    /// Distinct regions, sorted
    pub fn regions(&self) -> Vec<String> {
        self.distinct(|r| r.region.clone())
    }

    /// Distinct usage types, sorted
    pub fn usage_types(&self) -> Vec<String> {
        self.distinct(|r| r.usage_type.clone())
    }

    /// Billing units of a service, taken from its first catalog row
    pub fn unit_for_service(&self, service: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.service == service)
            .map(|r| r.units.as_str())
    }

    fn distinct(&self, key: impl Fn(&PricingRecord) -> String) -> Vec<String> {
        let mut values: Vec<String> = self.records.iter().map(key).collect();
        values.sort();
        values.dedup();
        values
    }
}

/// Default usage magnitude for a record's billing units: 100 for
/// GB-denominated units, 730 (a month of hours) for hourly units,
/// 10 otherwise.
pub fn default_usage(units: &str) -> f64 {
    if units.contains("GB") {
        DEFAULT_USAGE_GB
    } else if units.contains("Hour") {
        DEFAULT_USAGE_HOURS
    } else {
        DEFAULT_USAGE_OTHER
    }
}
