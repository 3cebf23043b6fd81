//! Core data models for the pricing engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One row of the pricing catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRecord {
    pub provider: String,
    pub service: String,
    pub instance_type: Option<String>,
    pub region: String,
    pub usage_type: String,
    pub price_per_unit: f64,
    pub units: String,
    pub currency: String,
    pub performance_score: Option<f64>,
    pub availability: Option<f64>,
    pub reserved_discount_1yr: Option<f64>,
    pub reserved_discount_3yr: Option<f64>,
}

impl PricingRecord {
    /// Discount percentage for a reservation term, if the record carries one
    pub fn discount_for(&self, term: ReservationTerm) -> Option<f64> {
        match term {
            ReservationTerm::OnDemand => None,
            ReservationTerm::OneYear => self.reserved_discount_1yr,
            ReservationTerm::ThreeYear => self.reserved_discount_3yr,
        }
    }
}

/// Billing period for cost calculations
///
/// Catalog prices are expressed per month-equivalent; `Day` and `Year`
/// scale linearly from that (see `cost::base_cost`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingPeriod {
    #[serde(rename = "day")]
    Day,
    #[default]
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "year")]
    Year,
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillingPeriod::Day => "day",
            BillingPeriod::Month => "month",
            BillingPeriod::Year => "year",
        };
        f.write_str(s)
    }
}

impl FromStr for BillingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(BillingPeriod::Day),
            "month" => Ok(BillingPeriod::Month),
            "year" => Ok(BillingPeriod::Year),
            other => Err(format!(
                "unknown billing period '{}' (expected day, month or year)",
                other
            )),
        }
    }
}

/// Reservation term (commitment length) for pricing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationTerm {
    #[default]
    #[serde(rename = "on-demand")]
    OnDemand,
    #[serde(rename = "1yr")]
    OneYear,
    #[serde(rename = "3yr")]
    ThreeYear,
}

impl fmt::Display for ReservationTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationTerm::OnDemand => "on-demand",
            ReservationTerm::OneYear => "1yr",
            ReservationTerm::ThreeYear => "3yr",
        };
        f.write_str(s)
    }
}

impl FromStr for ReservationTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on-demand" | "ondemand" => Ok(ReservationTerm::OnDemand),
            "1yr" => Ok(ReservationTerm::OneYear),
            "3yr" => Ok(ReservationTerm::ThreeYear),
            other => Err(format!(
                "unknown reservation term '{}' (expected on-demand, 1yr or 3yr)",
                other
            )),
        }
    }
}

/// Full cost detail for one record under given usage parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostDetail {
    pub base_cost: f64,
    pub discount_percentage: f64,
    pub final_cost: f64,
    pub currency: String,
    pub period: BillingPeriod,
}

/// One row of a cross-provider comparison table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub provider: String,
    pub service: String,
    pub region: String,
    pub on_demand_cost: f64,
    pub reserved_1yr_cost: f64,
    pub reserved_3yr_cost: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<f64>,
}

/// One row of a price/performance ranking (lower ratio is better)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRow {
    pub provider: String,
    pub service: String,
    pub region: String,
    pub cost: f64,
    pub performance_score: f64,
    pub ratio: f64,
    pub currency: String,
}

/// One service's share of a multi-service cost simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdownItem {
    /// Display name: "<provider> <service>"
    pub name: String,
    pub cost: f64,
    pub currency: String,
}

/// Result of a multi-service cost simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub items: Vec<CostBreakdownItem>,
    pub total_cost: f64,
    /// Currency of the last included service; mixed-currency catalogs
    /// are summed as-is (see `simulator`)
    pub currency: String,
}

/// Price of one catalog row within a provider's regional spread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalPrice {
    pub service: String,
    pub region: String,
    pub price_per_unit: f64,
    pub units: String,
    pub currency: String,
    /// Percent above the provider's cheapest region; `None` when the
    /// cheapest price is zero
    pub pct_above_lowest: Option<f64>,
}

/// Per-provider regional price variance for one usage type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalVariance {
    pub provider: String,
    /// Rows sorted by price ascending
    pub prices: Vec<RegionalPrice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_period_round_trips_through_strings() {
        for (s, p) in [
            ("day", BillingPeriod::Day),
            ("month", BillingPeriod::Month),
            ("year", BillingPeriod::Year),
        ] {
            assert_eq!(s.parse::<BillingPeriod>().unwrap(), p);
            assert_eq!(p.to_string(), s);
        }
        assert!("week".parse::<BillingPeriod>().is_err());
    }

    #[test]
    fn reservation_term_round_trips_through_strings() {
        for (s, t) in [
            ("on-demand", ReservationTerm::OnDemand),
            ("1yr", ReservationTerm::OneYear),
            ("3yr", ReservationTerm::ThreeYear),
        ] {
            assert_eq!(s.parse::<ReservationTerm>().unwrap(), t);
            assert_eq!(t.to_string(), s);
        }
        assert!("5yr".parse::<ReservationTerm>().is_err());
    }

    #[test]
    fn enums_serialize_with_source_spellings() {
        assert_eq!(
            serde_json::to_string(&BillingPeriod::Day).unwrap(),
            "\"day\""
        );
        assert_eq!(
            serde_json::to_string(&ReservationTerm::OneYear).unwrap(),
            "\"1yr\""
        );
        assert_eq!(
            serde_json::from_str::<ReservationTerm>("\"on-demand\"").unwrap(),
            ReservationTerm::OnDemand
        );
    }

    #[test]
    fn discount_for_reads_the_matching_field() {
        let mut record = PricingRecord {
            provider: "AWS".to_string(),
            service: "S3 Standard".to_string(),
            instance_type: None,
            region: "US East".to_string(),
            usage_type: "Storage".to_string(),
            price_per_unit: 0.023,
            units: "GB/Month".to_string(),
            currency: "USD".to_string(),
            performance_score: None,
            availability: None,
            reserved_discount_1yr: Some(20.0),
            reserved_discount_3yr: None,
        };

        assert_eq!(record.discount_for(ReservationTerm::OnDemand), None);
        assert_eq!(record.discount_for(ReservationTerm::OneYear), Some(20.0));
        assert_eq!(record.discount_for(ReservationTerm::ThreeYear), None);

        record.reserved_discount_3yr = Some(40.0);
        assert_eq!(record.discount_for(ReservationTerm::ThreeYear), Some(40.0));
    }
}
