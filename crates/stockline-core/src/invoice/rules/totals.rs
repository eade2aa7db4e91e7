//! Labeled total-amount extraction.

use super::patterns::TOTAL_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Total field extractor.
///
/// Walks the label catalog (`Total:`, `Amount Due:`, `Balance:`) in
/// priority order and returns the literal trailing value of the first
/// label found. No arithmetic validation against line items is performed.
pub struct TotalExtractor;

impl TotalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TotalExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in TOTAL_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                let full_match = caps.get(0).expect("group 0 always present");
                results.push(
                    ExtractionMatch::new(caps[1].trim().to_string(), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the labeled total from the whole text.
pub fn extract_total(text: &str) -> Option<String> {
    TotalExtractor::new().extract(text).map(|m| m.value)
}
