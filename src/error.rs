use std::path::PathBuf;

use thiserror::Error;

/// Why a single input row could not become an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("column `{column}` is missing or empty")]
    MissingField { column: &'static str },

    #[error("column `{column}` holds `{value}`, which is not a valid number")]
    InvalidNumber { column: &'static str, value: String },

    #[error("row could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Usage(String),

    #[error("file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("malformed row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: RowError,
    },

    #[error("no data has been provided through the .csv file; no further analysis will be computed")]
    EmptyDataset,

    #[error("metrics of order `{id}` cannot be computed exactly within the decimal range")]
    Overflow { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
