//! CLI command implementations

pub mod catalog;
pub mod compare;
pub mod performance;
pub mod regional;
pub mod simulate;
