//! Error types for the stockline-core library.

use thiserror::Error;

/// Main error type for the stockline library.
///
/// Field extraction itself is total and never fails; "not recognized" is
/// modeled as an absent value on [`crate::models::invoice::ParsedInvoice`].
/// The only fallible library surface is serializing records for callers.
#[derive(Error, Debug)]
pub enum StocklineError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the stockline library.
pub type Result<T> = std::result::Result<T, StocklineError>;
