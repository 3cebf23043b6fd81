//! Regional pricing analysis command

use anyhow::Result;
use colored::Colorize;
use pricing_core::{regional_variance, Catalog};
use tabled::{settings::Style, Table, Tabled};

use crate::output::{print_info, OutputFormat};

/// Row for a provider's regional price table
#[derive(Tabled)]
struct RegionalTableRow {
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Price Per Unit")]
    price: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "% Above Lowest")]
    pct_above_lowest: String,
}

/// Show per-provider regional price variance for a usage type.
///
/// Regional analysis always runs over the full catalog, not the
/// session filters; the point is to see regions the filters would hide.
pub fn run(catalog: &Catalog, usage_type: &str, format: OutputFormat) -> Result<()> {
    let variance = regional_variance(catalog.records(), usage_type);

    if variance.is_empty() {
        print_info("Insufficient regional pricing data for the selected service type.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&variance)?);
        }
        OutputFormat::Table => {
            println!("{}", format!("Regional Pricing: {}", usage_type).bold());
            println!();

            for provider in &variance {
                println!("{} price variance:", provider.provider.bold());

                let rows: Vec<RegionalTableRow> = provider
                    .prices
                    .iter()
                    .map(|p| RegionalTableRow {
                        service: p.service.clone(),
                        region: p.region.clone(),
                        price: format!("{:.4} {}", p.price_per_unit, p.currency),
                        units: p.units.clone(),
                        pct_above_lowest: match p.pct_above_lowest {
                            Some(pct) => format!("{:.2}%", pct),
                            None => "-".to_string(),
                        },
                    })
                    .collect();

                let table = Table::new(rows).with(Style::rounded()).to_string();
                println!("{}", table);
                println!();
            }
        }
    }

    Ok(())
}
