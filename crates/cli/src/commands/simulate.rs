//! Multi-service cost simulation command

use std::collections::HashMap;

use anyhow::{bail, Result};
use colored::Colorize;
use pricing_core::{simulate, BillingPeriod, PricingRecord, ReservationTerm};
use tabled::{settings::Style, Table, Tabled};

use crate::output::{format_currency, print_warning, OutputFormat};

/// Row for the cost breakdown table
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Service")]
    name: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Inputs for the simulate command
pub struct Params<'a> {
    pub filtered: &'a [PricingRecord],
    pub services: &'a [String],
    pub usage_overrides: &'a [String],
    pub period: BillingPeriod,
    pub term: ReservationTerm,
    pub provider_filtered: bool,
    pub region_filtered: bool,
    pub format: OutputFormat,
}

/// Simulate the total bill for the selected services
pub fn run(params: Params<'_>) -> Result<()> {
    let usage_by_service = parse_usage_overrides(params.usage_overrides)?;

    let result = simulate(
        params.filtered,
        params.services,
        &usage_by_service,
        params.period,
        params.term,
    );

    if result.items.is_empty() {
        print_warning("Could not calculate costs with the current selections.");
        return Ok(());
    }

    match params.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", "Cost Simulation".bold());
            println!("{}", "=".repeat(50));
            println!(
                "{} {}",
                format!("Total Estimated Cost ({}/{}):", result.currency, params.period).bold(),
                format_currency(result.total_cost, &result.currency)
                    .green()
                    .bold()
            );
            println!();

            println!("{}", "Cost Breakdown".bold());
            println!("{}", "-".repeat(50));
            let rows: Vec<BreakdownRow> = result
                .items
                .iter()
                .map(|item| BreakdownRow {
                    name: item.name.clone(),
                    cost: format_currency(item.cost, &item.currency),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            print_suggestions(&params);
        }
    }

    Ok(())
}

/// Parse "<service>=<amount>" pairs into a usage map
fn parse_usage_overrides(overrides: &[String]) -> Result<HashMap<String, f64>> {
    let mut usage = HashMap::new();

    for entry in overrides {
        let Some((service, amount)) = entry.split_once('=') else {
            bail!("invalid usage override '{}': expected <service>=<amount>", entry);
        };

        let amount: f64 = amount.trim().parse().map_err(|_| {
            anyhow::anyhow!("invalid usage amount in '{}': expected a number", entry)
        })?;
        if amount < 0.0 {
            bail!("invalid usage amount in '{}': must be non-negative", entry);
        }

        usage.insert(service.trim().to_string(), amount);
    }

    Ok(usage)
}

/// Contextual cost optimization suggestions
fn print_suggestions(params: &Params<'_>) {
    let mut suggestions = Vec::new();

    if params.term == ReservationTerm::OnDemand {
        suggestions.push(
            "Consider using reserved instances for significant savings on predictable workloads.",
        );
    }
    if params.region_filtered {
        suggestions
            .push("Evaluate using different regions, as pricing can vary significantly by location.");
    }
    if params.provider_filtered {
        suggestions.push("Compare pricing across multiple cloud providers to find the best value.");
    }

    if suggestions.is_empty() {
        return;
    }

    println!();
    println!("{}", "Cost Optimization Suggestions".bold());
    println!("{}", "-".repeat(50));
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_amount_pairs() {
        let overrides = vec![
            "S3 Standard=250".to_string(),
            "EC2 = 730.5".to_string(),
        ];
        let usage = parse_usage_overrides(&overrides).unwrap();

        assert_eq!(usage.get("S3 Standard"), Some(&250.0));
        assert_eq!(usage.get("EC2"), Some(&730.5));
    }

    #[test]
    fn rejects_malformed_overrides() {
        assert!(parse_usage_overrides(&["no-separator".to_string()]).is_err());
        assert!(parse_usage_overrides(&["EC2=lots".to_string()]).is_err());
        assert!(parse_usage_overrides(&["EC2=-5".to_string()]).is_err());
    }
}
