//! Regional price variance analysis
//!
//! For one usage type, shows how each provider's unit price spreads
//! across regions relative to its cheapest region.

use crate::models::{PricingRecord, RegionalPrice, RegionalVariance};

/// Per-provider regional price spread for a usage type.
///
/// Providers appear in catalog first-seen order; within a provider,
/// rows are sorted by unit price ascending and annotated with the
/// percentage above that provider's lowest price. When the lowest
/// price is zero the percentage is undefined and reported as `None`.
pub fn regional_variance(records: &[PricingRecord], usage_type: &str) -> Vec<RegionalVariance> {
    let matching: Vec<&PricingRecord> = records
        .iter()
        .filter(|r| r.usage_type == usage_type)
        .collect();

    let mut providers: Vec<&str> = Vec::new();
    for record in &matching {
        if !providers.contains(&record.provider.as_str()) {
            providers.push(&record.provider);
        }
    }

    providers
        .into_iter()
        .map(|provider| {
            let mut rows: Vec<&&PricingRecord> = matching
                .iter()
                .filter(|r| r.provider == provider)
                .collect();
            rows.sort_by(|a, b| a.price_per_unit.total_cmp(&b.price_per_unit));

            let min_price = rows
                .first()
                .map(|r| r.price_per_unit)
                .unwrap_or_default();

            let prices = rows
                .into_iter()
                .map(|r| RegionalPrice {
                    service: r.service.clone(),
                    region: r.region.clone(),
                    price_per_unit: r.price_per_unit,
                    units: r.units.clone(),
                    currency: r.currency.clone(),
                    pct_above_lowest: (min_price > 0.0)
                        .then(|| (r.price_per_unit - min_price) / min_price * 100.0),
                })
                .collect();

            RegionalVariance {
                provider: provider.to_string(),
                prices,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn groups_by_provider_in_first_seen_order() {
        let catalog = Catalog::sample();
        let variance = regional_variance(catalog.records(), "Storage");

        let providers: Vec<_> = variance.iter().map(|v| v.provider.as_str()).collect();
        assert_eq!(providers, vec!["AWS", "Azure", "Google Cloud"]);
        assert!(variance.iter().all(|v| v.prices.len() == 3));
    }

    #[test]
    fn cheapest_region_is_zero_percent_above_lowest() {
        let catalog = Catalog::sample();
        let variance = regional_variance(catalog.records(), "Storage");

        let aws = &variance[0];
        assert_eq!(aws.prices[0].region, "US East");
        assert_eq!(aws.prices[0].pct_above_lowest, Some(0.0));

        // 0.025 vs 0.023 in the sample data
        let asia = aws.prices.iter().find(|p| p.region == "Asia Pacific").unwrap();
        let expected = (0.025 - 0.023) / 0.023 * 100.0;
        assert!((asia.pct_above_lowest.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn prices_sorted_ascending_within_provider() {
        let catalog = Catalog::sample();
        for variance in regional_variance(catalog.records(), "Storage") {
            for pair in variance.prices.windows(2) {
                assert!(pair[0].price_per_unit <= pair[1].price_per_unit);
            }
        }
    }

    #[test]
    fn zero_minimum_price_reports_undefined_variance() {
        let mut records = Catalog::sample().records().to_vec();
        // Make AWS's cheapest storage row free
        let row = records
            .iter_mut()
            .find(|r| r.provider == "AWS" && r.usage_type == "Storage")
            .unwrap();
        row.price_per_unit = 0.0;

        let variance = regional_variance(&records, "Storage");
        let aws = variance.iter().find(|v| v.provider == "AWS").unwrap();
        assert!(aws.prices.iter().all(|p| p.pct_above_lowest.is_none()));
    }

    #[test]
    fn unknown_usage_type_yields_no_groups() {
        let catalog = Catalog::sample();
        assert!(regional_variance(catalog.records(), "Networking").is_empty());
    }
}
