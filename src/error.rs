//! Error types for investment ingestion and configuration
//!
//! The return engine itself never fails; only loading and validating
//! records from files can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{value}' in field {field}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid investment '{name}': {reason}")]
    InvalidInvestment { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInvestment {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
