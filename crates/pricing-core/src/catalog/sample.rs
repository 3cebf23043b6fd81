//! Built-in sample pricing data
//!
//! A small demo dataset: storage, compute and database offerings
//! across AWS, Azure and Google Cloud. Used when no catalog file is
//! available.

use super::Catalog;
use crate::models::PricingRecord;

#[allow(clippy::too_many_arguments)]
fn row(
    provider: &str,
    service: &str,
    instance_type: Option<&str>,
    region: &str,
    usage_type: &str,
    price_per_unit: f64,
    units: &str,
    performance_score: f64,
    availability: f64,
    discount_1yr: f64,
    discount_3yr: f64,
) -> PricingRecord {
    PricingRecord {
        provider: provider.to_string(),
        service: service.to_string(),
        instance_type: instance_type.map(str::to_string),
        region: region.to_string(),
        usage_type: usage_type.to_string(),
        price_per_unit,
        units: units.to_string(),
        currency: "USD".to_string(),
        performance_score: Some(performance_score),
        availability: Some(availability),
        reserved_discount_1yr: Some(discount_1yr),
        reserved_discount_3yr: Some(discount_3yr),
    }
}

impl Catalog {
    /// Built-in sample catalog (all prices in USD)
    pub fn sample() -> Self {
        let records = vec![
            row("AWS", "S3 Standard", None, "US East", "Storage", 0.023, "GB/Month", 85.0, 99.99, 20.0, 40.0),
            row("AWS", "S3 Standard", None, "EU West", "Storage", 0.024, "GB/Month", 83.0, 99.99, 20.0, 40.0),
            row("AWS", "S3 Standard", None, "Asia Pacific", "Storage", 0.025, "GB/Month", 80.0, 99.95, 20.0, 40.0),
            row("Azure", "Blob Storage", None, "US East", "Storage", 0.018, "GB/Month", 82.0, 99.99, 25.0, 45.0),
            row("Azure", "Blob Storage", None, "EU West", "Storage", 0.02, "GB/Month", 80.0, 99.95, 25.0, 45.0),
            row("Azure", "Blob Storage", None, "Asia Pacific", "Storage", 0.022, "GB/Month", 78.0, 99.9, 25.0, 45.0),
            row("Google Cloud", "Cloud Storage", None, "US East", "Storage", 0.02, "GB/Month", 87.0, 99.99, 15.0, 35.0),
            row("Google Cloud", "Cloud Storage", None, "EU West", "Storage", 0.021, "GB/Month", 85.0, 99.95, 15.0, 35.0),
            row("Google Cloud", "Cloud Storage", None, "Asia Pacific", "Storage", 0.023, "GB/Month", 83.0, 99.9, 15.0, 35.0),
            row("AWS", "EC2", Some("t2.micro"), "US East", "Compute", 0.0116, "Hour", 75.0, 99.95, 30.0, 60.0),
            row("Azure", "Virtual Machine", Some("B1s"), "US East", "Compute", 0.0104, "Hour", 78.0, 99.95, 33.0, 62.0),
            row("Google Cloud", "Compute Engine", Some("e2-micro"), "US East", "Compute", 0.01, "Hour", 80.0, 99.99, 28.0, 58.0),
            row("AWS", "RDS", Some("db.t3.micro"), "US East", "Database", 0.017, "Hour", 88.0, 99.99, 25.0, 50.0),
            row("Azure", "SQL Database", Some("General Purpose"), "US East", "Database", 0.016, "Hour", 85.0, 99.95, 27.0, 52.0),
            row("Google Cloud", "Cloud SQL", Some("db-f1-micro"), "US East", "Database", 0.015, "Hour", 86.0, 99.95, 20.0, 45.0),
        ];

        Self { records }
    }
}
