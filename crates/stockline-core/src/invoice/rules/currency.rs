//! Document-wide currency detection.

use super::patterns::CURRENCY_SYMBOL;
use super::totals::TotalExtractor;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::invoice::Currency;

/// Currency field detector.
///
/// Scans for currency symbols (`$`, `€`, `£`, `¥`, `円`). Occurrences
/// inside a recognized total line take priority; otherwise the first
/// occurrence anywhere in the text wins. Multi-currency documents are not
/// supported: the single first-detected currency stands for the whole
/// document.
pub struct CurrencyDetector;

impl CurrencyDetector {
    pub fn new() -> Self {
        Self
    }

    /// Find the first symbol in `text`, reporting its span shifted by
    /// `offset` so positions stay relative to the original input when a
    /// sub-slice is scanned.
    fn detect_in(&self, text: &str, offset: usize) -> Option<ExtractionMatch<Currency>> {
        let symbol = CURRENCY_SYMBOL.find(text)?;
        let currency = Currency::from_symbol(symbol.as_str())?;
        Some(
            ExtractionMatch::new(currency, symbol.as_str())
                .with_position(offset + symbol.start(), offset + symbol.end()),
        )
    }
}

impl Default for CurrencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CurrencyDetector {
    type Output = ExtractionMatch<Currency>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        // A symbol next to the labeled total is the strongest signal for
        // the document currency.
        if let Some(total) = TotalExtractor::new().extract(text) {
            if let Some((start, end)) = total.position {
                if let Some(found) = self.detect_in(&text[start..end], start) {
                    return Some(found);
                }
            }
        }

        self.detect_in(text, 0)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CURRENCY_SYMBOL
            .find_iter(text)
            .filter_map(|m| {
                Currency::from_symbol(m.as_str())
                    .map(|c| ExtractionMatch::new(c, m.as_str()).with_position(m.start(), m.end()))
            })
            .collect()
    }
}

/// Detect the document currency from the whole text.
pub fn detect_currency(text: &str) -> Option<Currency> {
    CurrencyDetector::new().extract(text).map(|m| m.value)
}
