//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Resolve the effective output format: an explicit CLI flag wins,
/// then the config file's default, then table output.
pub fn resolve_format(flag: Option<OutputFormat>, configured: Option<&str>) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match configured {
        Some(value) => match OutputFormat::from_str(value, true) {
            Ok(format) => format,
            Err(_) => {
                tracing::warn!(
                    value,
                    "Ignoring unknown default_format in config file; using table output"
                );
                OutputFormat::default()
            }
        },
        None => OutputFormat::default(),
    }
}

/// Print an informational message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format currency
pub fn format_currency(amount: f64, currency: &str) -> String {
    match currency {
        "USD" => format!("${:.2}", amount),
        "EUR" => format!("€{:.2}", amount),
        "GBP" => format!("£{:.2}", amount),
        _ => format!("{:.2} {}", amount, currency),
    }
}

/// Format an optional score/percentage-like value, "-" when absent
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Format a price/performance ratio; infinite ratios render as "inf"
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.4}", ratio)
    }
}
