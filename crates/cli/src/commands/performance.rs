//! Price/performance ranking command

use anyhow::Result;
use colored::Colorize;
use pricing_core::{performance_ratios, PricingRecord};
use tabled::{settings::Style, Table, Tabled};

use crate::output::{format_currency, format_ratio, print_info, OutputFormat};

/// Row for the price/performance table
#[derive(Tabled)]
struct PerformanceTableRow {
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Performance Score")]
    score: String,
    #[tabled(rename = "Price/Performance Ratio")]
    ratio: String,
}

/// Rank the filtered services by price/performance ratio
pub fn run(filtered: &[PricingRecord], usage: f64, format: OutputFormat) -> Result<()> {
    let rows = performance_ratios(filtered, usage);

    if rows.is_empty() {
        print_info(
            "Performance data is not available in the current dataset or no services match your filters.",
        );
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            println!("{}", "Price/Performance Ranking".bold());
            println!(
                "{}",
                "Performance scores are on a 0-100 scale; lower ratios are better value.".dimmed()
            );
            println!();

            let table_rows: Vec<PerformanceTableRow> = rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let ratio = format_ratio(r.ratio);
                    // Rows arrive sorted ascending; the first is the best value
                    let ratio = if i == 0 {
                        ratio.green().bold().to_string()
                    } else {
                        ratio
                    };

                    PerformanceTableRow {
                        provider: r.provider.clone(),
                        service: r.service.clone(),
                        region: r.region.clone(),
                        cost: format_currency(r.cost, &r.currency),
                        score: format!("{:.0}", r.performance_score),
                        ratio,
                    }
                })
                .collect();

            let table = Table::new(table_rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
