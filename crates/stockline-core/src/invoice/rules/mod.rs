//! Rule-based field extractors for invoice text.
//!
//! Each extractor owns an ordered catalog of patterns and stops at the
//! first successful match, so extraction is deterministic without any
//! scoring: catalog position is the priority.

pub mod currency;
pub mod dates;
pub mod invoice_id;
pub mod items;
pub mod patterns;
pub mod totals;

pub use currency::{detect_currency, CurrencyDetector};
pub use dates::{extract_date, DateNormalizer};
pub use invoice_id::{extract_invoice_id, InvoiceIdExtractor};
pub use items::{extract_line_items, LineItemExtractor};
pub use totals::{extract_total, TotalExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A successful pattern match with its location in the source text.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
