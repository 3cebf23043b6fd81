//! Price/performance ranking

use crate::cost::base_cost;
use crate::models::{BillingPeriod, PerformanceRow, PricingRecord};

/// Rank a catalog subset by price/performance ratio, ascending
/// (lower is better value).
///
/// Performance metrics are an optional dataset extension: when no row
/// in the subset carries a score, the result is empty. Rows without a
/// score are skipped from the ranking; a score of zero cannot be
/// meaningfully ranked and gets an infinite ratio, sorting last.
pub fn performance_ratios(records: &[PricingRecord], usage_amount: f64) -> Vec<PerformanceRow> {
    if !records.iter().any(|r| r.performance_score.is_some()) {
        return Vec::new();
    }

    let mut rows: Vec<PerformanceRow> = records
        .iter()
        .filter_map(|r| {
            let score = r.performance_score?;
            let cost = base_cost(usage_amount, r.price_per_unit, BillingPeriod::Month);
            let ratio = if score > 0.0 { cost / score } else { f64::INFINITY };

            Some(PerformanceRow {
                provider: r.provider.clone(),
                service: r.service.clone(),
                region: r.region.clone(),
                cost,
                performance_score: score,
                ratio,
                currency: r.currency.clone(),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
    rows
}
