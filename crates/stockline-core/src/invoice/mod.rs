//! Invoice text parsing module.

mod parser;
pub mod rules;

pub use parser::InvoiceTextParser;

use crate::models::invoice::ParsedInvoice;

/// Trait for turning raw OCR text into a structured invoice record.
///
/// Parsing is total: malformed or empty input yields the "nothing
/// recognized" record, never an error.
pub trait TextParser {
    /// Parse invoice fields from raw text.
    fn parse(&self, text: &str) -> ParsedInvoice;
}
