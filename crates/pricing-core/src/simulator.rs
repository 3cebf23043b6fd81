//! Multi-service cost simulation
//!
//! Picks the cheapest option per selected service under the current
//! filters and sums the result into an estimated bill.

use std::collections::HashMap;

use crate::catalog::default_usage;
use crate::cost::total_cost;
use crate::models::{
    BillingPeriod, CostBreakdownItem, PricingRecord, ReservationTerm, Simulation,
};

/// Estimate the total bill for a bundle of services.
///
/// For each name in `selected_services`, only rows of the (already
/// filtered) subset with that exact service name are considered. A
/// service the current filters exclude entirely is skipped silently:
/// it contributes nothing to the items or the total. Among matching
/// rows the one with the minimal final cost wins; ties break by row
/// order, first seen wins.
///
/// Usage comes from `usage_by_service`; a service without an entry
/// uses the default magnitude for its first row's billing units.
///
/// The total's currency is taken from the last included service. A
/// mixed-currency subset is still summed as-is (source-compatible
/// behavior); a warning is logged when that happens.
pub fn simulate(
    records: &[PricingRecord],
    selected_services: &[String],
    usage_by_service: &HashMap<String, f64>,
    period: BillingPeriod,
    term: ReservationTerm,
) -> Simulation {
    let mut items = Vec::new();
    let mut total = 0.0;
    let mut currency = String::new();

    for service in selected_services {
        let candidates: Vec<&PricingRecord> = records
            .iter()
            .filter(|r| &r.service == service)
            .collect();

        let Some(first) = candidates.first() else {
            tracing::debug!(service = %service, "No rows match current filters; skipping service");
            continue;
        };

        let usage = usage_by_service
            .get(service)
            .copied()
            .unwrap_or_else(|| default_usage(&first.units));

        // Strictly-less comparison keeps the first-seen row on ties
        let mut best: Option<(&PricingRecord, f64)> = None;
        for &record in &candidates {
            let cost = total_cost(record, usage, period, term).final_cost;
            if best.map(|(_, c)| cost < c).unwrap_or(true) {
                best = Some((record, cost));
            }
        }

        if let Some((record, cost)) = best {
            items.push(CostBreakdownItem {
                name: format!("{} {}", record.provider, service),
                cost,
                currency: record.currency.clone(),
            });
            total += cost;
            currency = record.currency.clone();
        }
    }

    let mut currencies: Vec<&str> = items.iter().map(|i| i.currency.as_str()).collect();
    currencies.sort_unstable();
    currencies.dedup();
    if currencies.len() > 1 {
        tracing::warn!(
            currencies = ?currencies,
            "Simulation sums costs across mixed currencies"
        );
    }

    Simulation {
        items,
        total_cost: total,
        currency,
    }
}
