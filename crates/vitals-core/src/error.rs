//! Error types for Vitals Core
//!
//! Normalization and scoring never fail on bad field values. These errors only
//! cover input whose overall shape falls outside the patient record schema.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid patient record: {0}")]
    InvalidRecord(String),

    #[error("Expected a JSON array of patient records, found {0}")]
    NotABatch(String),

    #[error("Invalid patient record at index {index}: {source}")]
    InvalidBatchEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidRecord(err.to_string())
    }
}
