//! Regex pattern catalogs for invoice field extraction.
//!
//! Catalog order is priority order: every extractor walks its catalog from
//! the top and stops at the first pattern that matches, so adding a pattern
//! at the end can only recognize more, never change existing behavior.

use lazy_static::lazy_static;
use regex::Regex;

/// A price-shaped token: a symbol-prefixed amount (`$150.00`, `€ 99`,
/// `£12.50`, `¥1500`) or a yen-suffixed amount (`1500円`).
pub const PRICE: &str =
    r"(?:[$€£¥]\s?[0-9][0-9,]*(?:\.[0-9]{1,2})?|[0-9][0-9,]*(?:\.[0-9]{1,2})?\s*円)";

lazy_static! {
    // Invoice identifier labels, in priority order. The first pattern also
    // covers the "Invoice# 123" spacing variant.
    pub static ref INVOICE_ID_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)invoice\s*#\s*([A-Za-z0-9][A-Za-z0-9/_-]*)").unwrap(),
        Regex::new(r"(?i)invoice\s*:\s*([A-Za-z0-9][A-Za-z0-9/_-]*)").unwrap(),
        Regex::new(r"(?i)invoice\s+no\b\.?\s*:?\s*([A-Za-z0-9][A-Za-z0-9/_-]*)").unwrap(),
        Regex::new(r"(?i)invoice\s+id\b\s*:?\s*([A-Za-z0-9][A-Za-z0-9/_-]*)").unwrap(),
        Regex::new(r"(?i)receipt\s*#\s*([A-Za-z0-9][A-Za-z0-9/_-]*)").unwrap(),
    ];

    // Date notations, in priority order. ISO is already canonical; the
    // numeric year-first and day-first forms are rewritten to ISO; the CJK
    // form is preserved verbatim.
    pub static ref DATE_ISO: Regex =
        Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap();
    pub static ref DATE_SLASH_YMD: Regex =
        Regex::new(r"\b(\d{4})/(\d{1,2})/(\d{1,2})\b").unwrap();
    pub static ref DATE_DOT_YMD: Regex =
        Regex::new(r"\b(\d{4})\.(\d{1,2})\.(\d{1,2})\b").unwrap();
    pub static ref DATE_DASH_DMY: Regex =
        Regex::new(r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b").unwrap();
    pub static ref DATE_SLASH_DMY: Regex =
        Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap();
    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2})(?:st|nd|rd|th)?\s*,?\s*(\d{4})"
    ).unwrap();
    pub static ref DATE_CJK: Regex =
        Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日").unwrap();

    // Line-item surface grammars, matched against one trimmed line each.
    // "10 bottles of Wine" (optionally "... - $150.00")
    pub static ref ITEM_QTY_FIRST: Regex = Regex::new(&format!(
        r"(?i)^(\d+)\s+(\p{{L}}+)\s+of\s+(.+?)(?:\s*-\s*({PRICE}))?$"
    )).unwrap();
    // "Wine - 10 bottles - $150.00"
    pub static ref ITEM_DASHED: Regex = Regex::new(&format!(
        r"^(.+?)\s*-\s*(\d+)\s+(\p{{L}}+)\s*-\s*({PRICE})$"
    )).unwrap();
    // "Wine (10 bottles)" (optionally "... - $150.00")
    pub static ref ITEM_PARENTHETICAL: Regex = Regex::new(&format!(
        r"^(.+?)\s*\((\d+)\s+(\p{{L}}+)\)(?:\s*-?\s*({PRICE}))?$"
    )).unwrap();
    // "Wine x 10 bottles" (optionally "... - $150.00")
    pub static ref ITEM_MULTIPLICATIVE: Regex = Regex::new(&format!(
        r"^(.+?)\s+[xX×]\s*(\d+)\s+(\p{{L}}+)(?:\s*-\s*({PRICE}))?$"
    )).unwrap();
    // "Wine, 10 bottles, $150.00"
    pub static ref ITEM_COMMA: Regex = Regex::new(&format!(
        r"^(.+?),\s*(\d+)\s+(\p{{L}}+),\s*({PRICE})$"
    )).unwrap();
    // "ワイン10本 - 1500円": no separators between product, count and unit.
    pub static ref ITEM_CJK: Regex = Regex::new(&format!(
        r"^([\p{{Han}}\p{{Hiragana}}\p{{Katakana}}ー・]+)(\d+)([本箱缶個袋枚瓶台])(?:\s*-\s*({PRICE}))?$"
    )).unwrap();
    // "Wine - $150.00": no quantity token, count defaults to 1.
    pub static ref ITEM_PRICE_ONLY: Regex = Regex::new(&format!(
        r"^(.+?)\s*-\s*({PRICE})$"
    )).unwrap();

    // Section header that narrows line-item scanning.
    pub static ref ITEMS_HEADER: Regex = Regex::new(r"(?i)\bitems\s*:").unwrap();

    // Labeled lines that must never be mistaken for a product line by the
    // quantity-less fallback grammar.
    pub static ref LABEL_LINE: Regex = Regex::new(
        r"(?i)^(?:(?:sub\s*|grand\s+)?total|amount\s+due|balance|invoice|receipt|date|items?)\b"
    ).unwrap();

    // Trailing-amount labels, in priority order. The word boundary keeps
    // "Subtotal:" from satisfying the "Total:" pattern.
    pub static ref TOTAL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\btotal\s*:\s*([^\n]+)").unwrap(),
        Regex::new(r"(?i)\bamount\s+due\s*:\s*([^\n]+)").unwrap(),
        Regex::new(r"(?i)\bbalance\s*:\s*([^\n]+)").unwrap(),
    ];

    // Currency symbols/tokens near amounts.
    pub static ref CURRENCY_SYMBOL: Regex = Regex::new(r"[$€£¥円]").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_fragment() {
        let price = Regex::new(&format!("^{PRICE}$")).unwrap();
        assert!(price.is_match("$150.00"));
        assert!(price.is_match("€ 99"));
        assert!(price.is_match("£1,250.50"));
        assert!(price.is_match("¥1500"));
        assert!(price.is_match("1500円"));
        assert!(!price.is_match("150"));
    }

    #[test]
    fn test_subtotal_does_not_match_total() {
        assert!(!TOTAL_PATTERNS[0].is_match("Subtotal: $10.00"));
        assert!(TOTAL_PATTERNS[0].is_match("Total: $10.00"));
        assert!(TOTAL_PATTERNS[0].is_match("Grand Total: $10.00"));
    }

    #[test]
    fn test_invoice_id_catalog_order() {
        // Catalog order must stay stable; extractors rely on it.
        assert_eq!(INVOICE_ID_PATTERNS.len(), 5);
        assert!(INVOICE_ID_PATTERNS[0].is_match("Invoice #12345"));
        assert!(INVOICE_ID_PATTERNS[0].is_match("Invoice# 12345"));
        assert!(INVOICE_ID_PATTERNS[4].is_match("Receipt #R-99"));
    }
}
