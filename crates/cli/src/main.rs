//! Cloud Service Pricing Simulator CLI
//!
//! A command-line tool for comparing cloud provider pricing, ranking
//! price/performance and simulating multi-service usage costs.

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pricing_core::{filter, BillingPeriod, Catalog, FilterCriteria, ReservationTerm};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{catalog as catalog_cmd, compare, performance, regional, simulate};

/// Cloud Service Pricing Simulator CLI
#[derive(Parser)]
#[command(name = "cloudprice")]
#[command(author, version, about = "Compare cloud provider pricing and simulate usage costs", long_about = None)]
pub struct Cli {
    /// Path to a pricing catalog CSV (can also be set via CLOUDPRICE_DATA env var;
    /// falls back to built-in sample data)
    #[arg(long, env = "CLOUDPRICE_DATA")]
    pub data: Option<PathBuf>,

    /// Cloud provider filter ("All" = no constraint)
    #[arg(long, default_value = "All")]
    pub provider: String,

    /// Service type filter, e.g. Storage or Compute ("All" = no constraint)
    #[arg(long, default_value = "All")]
    pub service_type: String,

    /// Region filter ("All" = no constraint)
    #[arg(long, default_value = "All")]
    pub region: String,

    /// Output format (defaults to the configured format, then table)
    #[arg(long, short)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare pricing across providers for a service type
    Compare {
        /// Usage amount in the service's billing units
        #[arg(long, short, default_value_t = 100.0)]
        usage: f64,
    },

    /// Rank services by price/performance ratio (lower is better)
    Performance {
        /// Usage amount for the cost side of the ratio
        #[arg(long, short, default_value_t = 100.0)]
        usage: f64,
    },

    /// Analyze how a service type's pricing varies across regions
    Regional {
        /// Service type to analyze, e.g. Storage
        usage_type: String,
    },

    /// Simulate the total bill for a bundle of services
    Simulate {
        /// Service to include (repeat for several)
        #[arg(long, short, required = true)]
        service: Vec<String>,

        /// Per-service usage override as "<service>=<amount>" (repeatable;
        /// services without one use the default for their billing units)
        #[arg(long)]
        usage: Vec<String>,

        /// Billing period (day, month or year)
        #[arg(long, default_value = "month")]
        period: BillingPeriod,

        /// Reservation term (on-demand, 1yr or 3yr)
        #[arg(long, default_value = "on-demand")]
        term: ReservationTerm,
    },

    /// Inspect the loaded pricing catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Show all catalog rows
    Show,

    /// List distinct providers, services, regions and usage types
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so JSON output stays pipe-clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = config::Config::load().unwrap_or_default();
    let format = output::resolve_format(cli.format, config.default_format.as_deref());
    let data_path = cli.data.clone().or_else(|| config.data_path.map(PathBuf::from));
    let catalog = load_catalog(data_path)?;

    // The "All" sentinel is a UI convention; the core only sees
    // optional constraints
    let criteria = FilterCriteria {
        provider: unset_if_all(&cli.provider),
        usage_type: unset_if_all(&cli.service_type),
        region: unset_if_all(&cli.region),
        ..Default::default()
    };
    let filtered = filter(catalog.records(), &criteria);

    match &cli.command {
        Commands::Compare { usage } => compare::run(
            &catalog,
            &filtered,
            unset_if_all(&cli.service_type).as_deref(),
            unset_if_all(&cli.region).as_deref(),
            *usage,
            format,
        ),
        Commands::Performance { usage } => performance::run(&filtered, *usage, format),
        Commands::Regional { usage_type } => {
            regional::run(&catalog, usage_type, format)
        }
        Commands::Simulate {
            service,
            usage,
            period,
            term,
        } => simulate::run(simulate::Params {
            filtered: &filtered,
            services: service,
            usage_overrides: usage,
            period: *period,
            term: *term,
            provider_filtered: unset_if_all(&cli.provider).is_some(),
            region_filtered: unset_if_all(&cli.region).is_some(),
            format,
        }),
        Commands::Catalog(CatalogCommands::Show) => catalog_cmd::show(&catalog, format),
        Commands::Catalog(CatalogCommands::Summary) => catalog_cmd::summary(&catalog, format),
    }
}

/// Map the user-facing "All"/empty sentinel to "no constraint"
fn unset_if_all(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Load the catalog from a CSV path, falling back to the built-in
/// sample data when no usable path is given. A path that exists but
/// fails to parse is fatal (malformed catalog).
fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) if path.exists() => {
            Catalog::from_csv_path(&path)
                .with_context(|| format!("failed to load pricing catalog from {}", path.display()))
        }
        Some(path) => {
            tracing::warn!(
                path = %path.display(),
                "Pricing data file not found; using built-in sample data"
            );
            Ok(Catalog::sample())
        }
        None => {
            tracing::warn!("No pricing data file configured; using built-in sample data");
            Ok(Catalog::sample())
        }
    }
}
