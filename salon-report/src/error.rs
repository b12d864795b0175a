//! Error types for salon-report

use thiserror::Error;

/// Reporting error type
#[derive(Debug, Error)]
pub enum ReportError {
    /// Store or configuration failure from the common layer
    #[error(transparent)]
    Common(#[from] salon_common::Error),

    /// Report file could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Price table entry rejected
    #[error("Invalid price for '{service}': {price}")]
    InvalidPrice { service: String, price: f64 },
}

/// Result type for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;
