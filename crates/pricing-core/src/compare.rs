//! Cross-provider price comparison

use crate::cost::{apply_discount, base_cost};
use crate::models::{BillingPeriod, ComparisonRow, PricingRecord};

/// Build a comparison table for one usage type across providers.
///
/// Rows are selected by exact usage-type match, optionally restricted
/// to a region (`None` = all regions). On-demand costs are computed at
/// month granularity; the reserved columns discount that same base
/// cost, falling back to the on-demand figure when a record has no
/// discount for the term. An empty selection yields an empty table.
///
/// The output carries no guaranteed sort order; presentation-layer
/// sorting is the caller's concern.
pub fn compare_providers(
    records: &[PricingRecord],
    usage_type: &str,
    usage_amount: f64,
    region: Option<&str>,
) -> Vec<ComparisonRow> {
    records
        .iter()
        .filter(|r| r.usage_type == usage_type)
        .filter(|r| region.map(|reg| r.region == reg).unwrap_or(true))
        .map(|r| {
            let on_demand_cost = base_cost(usage_amount, r.price_per_unit, BillingPeriod::Month);

            let discounted = |discount: Option<f64>| match discount {
                Some(pct) => apply_discount(on_demand_cost, pct),
                None => on_demand_cost,
            };

            ComparisonRow {
                provider: r.provider.clone(),
                service: r.service.clone(),
                region: r.region.clone(),
                on_demand_cost,
                reserved_1yr_cost: discounted(r.reserved_discount_1yr),
                reserved_3yr_cost: discounted(r.reserved_discount_3yr),
                currency: r.currency.clone(),
                performance_score: r.performance_score,
                availability: r.availability,
            }
        })
        .collect()
}
