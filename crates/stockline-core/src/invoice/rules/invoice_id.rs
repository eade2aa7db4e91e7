//! Invoice identifier extraction.

use super::patterns::INVOICE_ID_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Invoice-ID field extractor.
///
/// Walks the label catalog in priority order; the first pattern that
/// matches anywhere in the text wins, regardless of where in the text a
/// lower-priority pattern might have matched earlier.
pub struct InvoiceIdExtractor;

impl InvoiceIdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for InvoiceIdExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in INVOICE_ID_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                let id = caps[1].trim().to_string();

                // The same token often satisfies several label patterns.
                if results.iter().any(|r: &ExtractionMatch<String>| r.value == id) {
                    continue;
                }

                let full_match = caps.get(0).expect("group 0 always present");
                results.push(
                    ExtractionMatch::new(id, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the invoice identifier from the whole text.
pub fn extract_invoice_id(text: &str) -> Option<String> {
    InvoiceIdExtractor::new().extract(text).map(|m| m.value)
}
