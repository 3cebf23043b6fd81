//! Usage-based cost calculation
//!
//! Catalog prices are expressed per month-equivalent. Period scaling is
//! deliberately linear: `day` divides by a fixed 30 and `year` multiplies
//! by 12, for hourly-billed and storage rows alike. This mirrors the
//! source data's conventions and must not be "corrected" without also
//! changing every downstream figure.

use crate::models::{BillingPeriod, CostDetail, PricingRecord, ReservationTerm};

/// Fixed day count used for the `day` period (not calendar-accurate)
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Month count used for the `year` period
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Compute the undiscounted cost of `usage` units at `price_per_unit`,
/// scaled to the billing period.
pub fn base_cost(usage: f64, price_per_unit: f64, period: BillingPeriod) -> f64 {
    let cost = usage * price_per_unit;
    match period {
        BillingPeriod::Day => cost / DAYS_PER_MONTH,
        BillingPeriod::Month => cost,
        BillingPeriod::Year => cost * MONTHS_PER_YEAR,
    }
}

/// Apply a reserved-instance discount percentage to a cost.
///
/// Pass-through arithmetic: a percentage above 100 yields a negative
/// cost. Range validation is the catalog's concern, not the calculator's.
pub fn apply_discount(cost: f64, discount_percent: f64) -> f64 {
    cost * (1.0 - discount_percent / 100.0)
}

/// Full cost detail for one record: base cost, applicable discount and
/// final cost under the given reservation term.
///
/// A record without the requested discount field falls back to
/// on-demand pricing rather than failing.
pub fn total_cost(
    record: &PricingRecord,
    usage: f64,
    period: BillingPeriod,
    term: ReservationTerm,
) -> CostDetail {
    let base = base_cost(usage, record.price_per_unit, period);

    let (discount_percentage, final_cost) = match record.discount_for(term) {
        Some(pct) => (pct, apply_discount(base, pct)),
        None => (0.0, base),
    };

    CostDetail {
        base_cost: base,
        discount_percentage,
        final_cost,
        currency: record.currency.clone(),
        period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, d1: Option<f64>, d3: Option<f64>) -> PricingRecord {
        PricingRecord {
            provider: "AWS".to_string(),
            service: "S3 Standard".to_string(),
            instance_type: None,
            region: "US East".to_string(),
            usage_type: "Storage".to_string(),
            price_per_unit: price,
            units: "GB/Month".to_string(),
            currency: "USD".to_string(),
            performance_score: Some(85.0),
            availability: Some(99.99),
            reserved_discount_1yr: d1,
            reserved_discount_3yr: d3,
        }
    }

    #[test]
    fn base_cost_scales_per_period() {
        assert!((base_cost(100.0, 0.023, BillingPeriod::Month) - 2.3).abs() < 1e-9);
        assert_eq!(
            base_cost(100.0, 0.023, BillingPeriod::Day),
            (100.0 * 0.023) / 30.0
        );
        assert_eq!(
            base_cost(100.0, 0.023, BillingPeriod::Year),
            (100.0 * 0.023) * 12.0
        );
    }

    #[test]
    fn base_cost_is_zero_for_zero_usage_or_price() {
        assert_eq!(base_cost(0.0, 5.0, BillingPeriod::Month), 0.0);
        assert_eq!(base_cost(250.0, 0.0, BillingPeriod::Year), 0.0);
    }

    #[test]
    fn discount_boundaries() {
        assert_eq!(apply_discount(10.0, 0.0), 10.0);
        assert_eq!(apply_discount(10.0, 100.0), 0.0);
        assert_eq!(apply_discount(10.0, 25.0), 7.5);
        // Out-of-range percentages are passed through, not clamped
        assert!(apply_discount(10.0, 150.0) < 0.0);
    }

    #[test]
    fn total_cost_on_demand_equals_base_cost() {
        let r = record(0.023, Some(20.0), Some(40.0));
        for period in [BillingPeriod::Day, BillingPeriod::Month, BillingPeriod::Year] {
            let detail = total_cost(&r, 100.0, period, ReservationTerm::OnDemand);
            assert_eq!(detail.final_cost, base_cost(100.0, 0.023, period));
            assert_eq!(detail.discount_percentage, 0.0);
            assert_eq!(detail.currency, "USD");
        }
    }

    #[test]
    fn total_cost_applies_reserved_discounts() {
        let r = record(0.023, Some(20.0), Some(40.0));

        let d1 = total_cost(&r, 100.0, BillingPeriod::Month, ReservationTerm::OneYear);
        assert_eq!(d1.discount_percentage, 20.0);
        assert!((d1.final_cost - 1.84).abs() < 1e-9);

        let d3 = total_cost(&r, 100.0, BillingPeriod::Month, ReservationTerm::ThreeYear);
        assert_eq!(d3.discount_percentage, 40.0);
        assert!((d3.final_cost - 1.38).abs() < 1e-9);
    }

    #[test]
    fn missing_discount_falls_back_to_on_demand() {
        let r = record(0.023, None, None);
        let detail = total_cost(&r, 100.0, BillingPeriod::Month, ReservationTerm::OneYear);
        assert_eq!(detail.discount_percentage, 0.0);
        assert_eq!(detail.final_cost, detail.base_cost);
    }
}
