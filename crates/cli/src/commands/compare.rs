//! Price comparison command

use anyhow::Result;
use colored::Colorize;
use pricing_core::{compare_providers, Catalog, ComparisonRow, PricingRecord};
use tabled::{settings::Style, Table, Tabled};

use crate::output::{format_currency, format_optional, print_info, OutputFormat};

/// Row for the comparison table
#[derive(Tabled)]
struct ComparisonTableRow {
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "On-Demand Cost")]
    on_demand: String,
    #[tabled(rename = "1-Year Reserved")]
    reserved_1yr: String,
    #[tabled(rename = "3-Year Reserved")]
    reserved_3yr: String,
    #[tabled(rename = "Performance")]
    performance: String,
    #[tabled(rename = "Availability")]
    availability: String,
}

/// Compare pricing across providers for one service type
pub fn run(
    catalog: &Catalog,
    filtered: &[PricingRecord],
    service_type: Option<&str>,
    region: Option<&str>,
    usage: f64,
    format: OutputFormat,
) -> Result<()> {
    if filtered.is_empty() {
        print_info("No matching services found with the current filters. Please adjust your selections.");
        return Ok(());
    }

    // With no explicit service type, compare whatever the filters left first
    let usage_type = service_type.unwrap_or_else(|| filtered[0].usage_type.as_str());
    if service_type.is_none() {
        tracing::debug!(usage_type, "No service type given; comparing the first filtered type");
    }

    let rows = compare_providers(filtered, usage_type, usage, region);
    if rows.is_empty() {
        print_info("No matching services found with the current filters. Please adjust your selections.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            println!("{}", "Price Comparison".bold());
            println!("{}", format!("Usage type: {}", usage_type).dimmed());
            if let Some(units) = rows
                .first()
                .and_then(|r| catalog.unit_for_service(&r.service))
            {
                println!("{}", format!("Usage: {} {}", usage, units).dimmed());
            }
            println!();

            print_comparison_table(&rows);
        }
    }

    Ok(())
}

fn print_comparison_table(rows: &[ComparisonRow]) {
    let cheapest = rows
        .iter()
        .map(|r| r.on_demand_cost)
        .fold(f64::INFINITY, f64::min);

    let table_rows: Vec<ComparisonTableRow> = rows
        .iter()
        .map(|r| {
            let on_demand = format_currency(r.on_demand_cost, &r.currency);
            let on_demand = if r.on_demand_cost == cheapest {
                on_demand.green().bold().to_string()
            } else {
                on_demand
            };

            ComparisonTableRow {
                provider: r.provider.clone(),
                service: r.service.clone(),
                region: r.region.clone(),
                on_demand,
                reserved_1yr: format_currency(r.reserved_1yr_cost, &r.currency),
                reserved_3yr: format_currency(r.reserved_3yr_cost, &r.currency),
                performance: format_optional(r.performance_score),
                availability: format_optional(r.availability),
            }
        })
        .collect();

    let table = Table::new(table_rows).with(Style::rounded()).to_string();
    println!("{}", table);
}
