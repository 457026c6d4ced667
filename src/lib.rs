//! # Orders Analyzer
//!
//! Reads a CSV file of order lines and finds the order with the highest
//! total before discount, the one with the highest quantity, and the one
//! with the largest discount amount.

pub mod engine;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod parser;
pub mod report;
pub mod types;

use std::path::Path;

pub use engine::analyze_orders;
pub use error::{AnalysisError, RowError};
pub use types::{AnalysisResult, OrderRecord};

/// Runs the whole pipeline on the file at `path`.
pub fn analyze_file(path: &Path) -> Result<AnalysisResult, AnalysisError> {
    analyze_orders(ingest::OrderReader::open(path)?)
}
