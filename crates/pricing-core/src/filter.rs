//! Catalog row filtering

use serde::{Deserialize, Serialize};

use crate::models::PricingRecord;

/// Optional equality constraints over catalog fields
///
/// `None` means "no constraint on this field". The user-facing "All"
/// sentinel never reaches this layer; callers map it to `None` before
/// building criteria, so a catalog that happens to contain the literal
/// value "All" still filters correctly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub provider: Option<String>,
    pub service: Option<String>,
    pub instance_type: Option<String>,
    pub region: Option<String>,
    pub usage_type: Option<String>,
}

impl FilterCriteria {
    /// True when the record satisfies every constraint that is present
    pub fn matches(&self, record: &PricingRecord) -> bool {
        let field_matches =
            |criterion: &Option<String>, value: &str| match criterion {
                Some(wanted) => wanted == value,
                None => true,
            };

        field_matches(&self.provider, &record.provider)
            && field_matches(&self.service, &record.service)
            && field_matches(&self.region, &record.region)
            && field_matches(&self.usage_type, &record.usage_type)
            && match &self.instance_type {
                Some(wanted) => record.instance_type.as_deref() == Some(wanted.as_str()),
                None => true,
            }
    }
}

/// Select the catalog rows satisfying all present constraints,
/// preserving original order. An empty result is valid and means
/// "no match"; the input is never mutated.
pub fn filter(records: &[PricingRecord], criteria: &FilterCriteria) -> Vec<PricingRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}
