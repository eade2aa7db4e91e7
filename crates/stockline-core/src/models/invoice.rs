//! Parsed invoice models.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The structured result of parsing one invoice's raw OCR text.
///
/// Every field except `items` is optional: absent means "not recognized",
/// which is distinct from "recognized but empty". `items` is always present
/// and empty when no product lines were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInvoice {
    /// Invoice identifier token (e.g. "12345" from "Invoice #12345").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    /// Invoice date. Western numeric notations are normalized to
    /// `YYYY-MM-DD`; the CJK `年/月/日` notation is preserved verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    /// Recognized product lines, in order of appearance in the text.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Labeled total amount, as the literal matched substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Document-wide currency detected from symbols near amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl ParsedInvoice {
    /// The "nothing recognized" result: empty item list, all other fields
    /// absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Serialize as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One recognized product line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name as it appeared in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Quantity. Defaults to 1 when no quantity token is recognized near
    /// the product mention.
    pub count: u32,

    /// Unit of measure ("bottles", "cans", "本", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Price as the literal matched substring ("$150.00", "1500円").
    /// Not parsed into a number; currency formatting varies by locale and
    /// is not normalized at this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            product: None,
            count: 1,
            unit: None,
            price: None,
        }
    }
}

/// Supported document currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "JPY")]
    Jpy,
}

impl Currency {
    /// Map a currency symbol or token to its code.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "$" => Some(Currency::Usd),
            "€" => Some(Currency::Eur),
            "£" => Some(Currency::Gbp),
            "¥" | "円" => Some(Currency::Jpy),
            _ => None,
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_currency_from_symbol() {
        assert_eq!(Currency::from_symbol("$"), Some(Currency::Usd));
        assert_eq!(Currency::from_symbol("€"), Some(Currency::Eur));
        assert_eq!(Currency::from_symbol("£"), Some(Currency::Gbp));
        assert_eq!(Currency::from_symbol("¥"), Some(Currency::Jpy));
        assert_eq!(Currency::from_symbol("円"), Some(Currency::Jpy));
        assert_eq!(Currency::from_symbol("zł"), None);
    }

    #[test]
    fn test_empty_invoice_serializes_without_absent_fields() {
        let json = ParsedInvoice::empty().to_json().unwrap();
        assert_eq!(json, r#"{"items":[]}"#);
    }

    #[test]
    fn test_line_item_default_count() {
        let item = LineItem::default();
        assert_eq!(item.count, 1);
        assert_eq!(item.product, None);
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let invoice = ParsedInvoice {
            currency: Some(Currency::Eur),
            ..Default::default()
        };
        let json = invoice.to_json().unwrap();
        assert!(json.contains(r#""currency":"EUR""#));
    }
}
