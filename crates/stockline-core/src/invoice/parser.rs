//! Invoice parser orchestrating the field extractors.

use tracing::debug;

use super::rules::{
    detect_currency, extract_date, extract_invoice_id, extract_line_items, extract_total,
};
use super::TextParser;
use crate::models::invoice::ParsedInvoice;

/// Rule-based invoice parser.
///
/// Runs the five field extractors independently over the same text and
/// assembles the result; no extractor's outcome influences another's.
pub struct InvoiceTextParser;

impl InvoiceTextParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TextParser for InvoiceTextParser {
    fn parse(&self, text: &str) -> ParsedInvoice {
        if text.trim().is_empty() {
            debug!("empty input, returning empty invoice record");
            return ParsedInvoice::empty();
        }

        let invoice = ParsedInvoice {
            invoice_id: extract_invoice_id(text),
            invoice_date: extract_date(text),
            items: extract_line_items(text),
            total: extract_total(text),
            currency: detect_currency(text),
        };

        debug!(
            invoice_id = invoice.invoice_id.as_deref(),
            invoice_date = invoice.invoice_date.as_deref(),
            item_count = invoice.items.len(),
            total = invoice.total.as_deref(),
            currency = invoice.currency.map(|c| c.code()),
            "parsed invoice text"
        );

        invoice
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::invoice::{Currency, LineItem};

    #[test]
    fn test_parse_full_invoice() {
        let text = "Invoice #12345\nDate: 2023-10-15\nItems:\nWine - 5 bottles - $100\nBeer - 10 cans - $50";
        let parsed = InvoiceTextParser::new().parse(text);

        assert_eq!(parsed.invoice_id.as_deref(), Some("12345"));
        assert_eq!(parsed.invoice_date.as_deref(), Some("2023-10-15"));
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(
            parsed.items[0],
            LineItem {
                product: Some("Wine".to_string()),
                count: 5,
                unit: Some("bottles".to_string()),
                price: Some("$100".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_day_first_date_and_currency() {
        let text = "Invoice #1\nDate: 15/10/2023\nTotal: €150.00";
        let parsed = InvoiceTextParser::new().parse(text);

        assert_eq!(parsed.invoice_date.as_deref(), Some("2023-10-15"));
        assert_eq!(parsed.currency, Some(Currency::Eur));
        assert_eq!(parsed.total.as_deref(), Some("€150.00"));
    }

    #[test]
    fn test_parse_nothing_recognized() {
        let parsed = InvoiceTextParser::new().parse("the quick brown fox");

        assert_eq!(parsed, ParsedInvoice::empty());
        assert!(parsed.items.is_empty());
        assert_eq!(parsed.invoice_id, None);
        assert_eq!(parsed.invoice_date, None);
        assert_eq!(parsed.total, None);
        assert_eq!(parsed.currency, None);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(InvoiceTextParser::new().parse(""), ParsedInvoice::empty());
        assert_eq!(InvoiceTextParser::new().parse("  \n\t"), ParsedInvoice::empty());
    }

    #[test]
    fn test_parse_cjk_invoice() {
        let text = "Invoice #J-1\n2023年10月15日\nItems:\nワイン10本 - 1500円\nTotal: 1500円";
        let parsed = InvoiceTextParser::new().parse(text);

        assert_eq!(parsed.invoice_date.as_deref(), Some("2023年10月15日"));
        assert_eq!(parsed.currency, Some(Currency::Jpy));
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].unit.as_deref(), Some("本"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Invoice #77\nDate: 2024-01-02\nItems:\nWine x 3 bottles - $30\nTotal: $30";
        let parser = InvoiceTextParser::new();

        assert_eq!(parser.parse(text), parser.parse(text));
    }
}
