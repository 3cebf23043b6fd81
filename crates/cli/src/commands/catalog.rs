//! Catalog inspection commands

use anyhow::Result;
use colored::Colorize;
use pricing_core::Catalog;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::output::{format_optional, print_info, OutputFormat};

/// Row for the raw catalog table
#[derive(Tabled)]
struct CatalogTableRow {
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Instance Type")]
    instance_type: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Usage Type")]
    usage_type: String,
    #[tabled(rename = "Price Per Unit")]
    price: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Perf")]
    performance: String,
    #[tabled(rename = "1yr %")]
    discount_1yr: String,
    #[tabled(rename = "3yr %")]
    discount_3yr: String,
}

#[derive(Serialize)]
struct Summary {
    providers: Vec<String>,
    services: Vec<String>,
    regions: Vec<String>,
    usage_types: Vec<String>,
    rows: usize,
}

/// Show all catalog rows
pub fn show(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    if catalog.is_empty() {
        print_info("The pricing catalog is empty.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.records())?);
        }
        OutputFormat::Table => {
            println!("{}", "Pricing Catalog".bold());
            println!();

            let rows: Vec<CatalogTableRow> = catalog
                .records()
                .iter()
                .map(|r| CatalogTableRow {
                    provider: r.provider.clone(),
                    service: r.service.clone(),
                    instance_type: r.instance_type.clone().unwrap_or_else(|| "-".to_string()),
                    region: r.region.clone(),
                    usage_type: r.usage_type.clone(),
                    price: format!("{:.4}", r.price_per_unit),
                    units: r.units.clone(),
                    currency: r.currency.clone(),
                    performance: format_optional(r.performance_score),
                    discount_1yr: format_optional(r.reserved_discount_1yr),
                    discount_3yr: format_optional(r.reserved_discount_3yr),
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// List the catalog's distinct dimension values
pub fn summary(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let summary = Summary {
        providers: catalog.providers(),
        services: catalog.services(),
        regions: catalog.regions(),
        usage_types: catalog.usage_types(),
        rows: catalog.len(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            println!("{}", "Catalog Summary".bold());
            println!("{}", "=".repeat(50));
            println!("Rows:        {}", summary.rows);
            println!("Providers:   {}", summary.providers.join(", "));
            println!("Services:    {}", summary.services.join(", "));
            println!("Regions:     {}", summary.regions.join(", "));
            println!("Usage Types: {}", summary.usage_types.join(", "));
        }
    }

    Ok(())
}
