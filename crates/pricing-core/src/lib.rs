//! Pricing computation and comparison engine
//!
//! This crate provides the core functionality for:
//! - Catalog ingestion and validation (CSV or built-in sample data)
//! - Filtering by provider, service, instance type, region and usage type
//! - Usage-based cost calculation with reserved-instance discounts
//! - Cross-provider comparison tables
//! - Price/performance ranking
//! - Multi-service cost simulation and regional price variance
//!
//! Every operation is a pure, synchronous function over read-only
//! catalog data; results are plain data structures built fresh per
//! call, directly consumable by any presentation layer.

pub mod catalog;
pub mod compare;
pub mod cost;
pub mod filter;
pub mod models;
pub mod performance;
pub mod regional;
pub mod simulator;

pub use catalog::{default_usage, Catalog, CatalogError};
pub use compare::compare_providers;
pub use filter::{filter, FilterCriteria};
pub use models::*;
pub use performance::performance_ratios;
pub use regional::regional_variance;
pub use simulator::simulate;
