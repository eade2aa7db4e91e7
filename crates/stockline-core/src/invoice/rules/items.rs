//! Line-item extraction from invoice text.

use regex::Regex;
use tracing::debug;

use super::patterns::{
    ITEMS_HEADER, ITEM_CJK, ITEM_COMMA, ITEM_DASHED, ITEM_MULTIPLICATIVE, ITEM_PARENTHETICAL,
    ITEM_PRICE_ONLY, ITEM_QTY_FIRST, LABEL_LINE,
};
use super::FieldExtractor;
use crate::models::invoice::LineItem;

/// Line-item surface grammars, in catalog priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemGrammar {
    /// `<count> <unit> of <product>`.
    QtyFirst,
    /// `<product> - <count> <unit> - <price>`.
    Dashed,
    /// `<product> (<count> <unit>)`.
    Parenthetical,
    /// `<product> x <count> <unit> [- <price>]`.
    Multiplicative,
    /// `<product>, <count> <unit>, <price>`.
    Comma,
    /// `<product><count><unit> [- <price>]`, CJK, no separators.
    Cjk,
    /// `<product> - <price>`, no quantity token; count defaults to 1.
    PriceOnly,
}

fn grammar_catalog() -> [(ItemGrammar, &'static Regex); 7] {
    [
        (ItemGrammar::QtyFirst, &*ITEM_QTY_FIRST),
        (ItemGrammar::Dashed, &*ITEM_DASHED),
        (ItemGrammar::Parenthetical, &*ITEM_PARENTHETICAL),
        (ItemGrammar::Multiplicative, &*ITEM_MULTIPLICATIVE),
        (ItemGrammar::Comma, &*ITEM_COMMA),
        (ItemGrammar::Cjk, &*ITEM_CJK),
        (ItemGrammar::PriceOnly, &*ITEM_PRICE_ONLY),
    ]
}

/// Line-item field extractor.
///
/// Scans the region following an `Items:` header when one exists, the
/// whole text otherwise. Each line is matched against the grammar catalog
/// in priority order; the grammars anchor the full line, so a matched span
/// is consumed and cannot produce a second item. Lines matching no grammar
/// are silently skipped.
pub struct LineItemExtractor;

impl LineItemExtractor {
    pub fn new() -> Self {
        Self
    }

    fn scan_region<'a>(&self, text: &'a str) -> &'a str {
        match ITEMS_HEADER.find(text) {
            Some(header) => &text[header.end()..],
            None => text,
        }
    }

    fn parse_line(&self, line: &str) -> Option<LineItem> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        for (grammar, pattern) in grammar_catalog() {
            // Labeled lines ("Total: ...", "Amount Due - ...") must not fall
            // through to the quantity-less grammar.
            if grammar == ItemGrammar::PriceOnly && LABEL_LINE.is_match(line) {
                continue;
            }

            let Some(caps) = pattern.captures(line) else {
                continue;
            };

            let item = match grammar {
                ItemGrammar::QtyFirst => LineItem {
                    product: Some(caps[3].trim().to_string()),
                    count: caps[1].parse().unwrap_or(1),
                    unit: Some(caps[2].to_string()),
                    price: caps.get(4).map(|m| m.as_str().to_string()),
                },
                ItemGrammar::Dashed
                | ItemGrammar::Parenthetical
                | ItemGrammar::Multiplicative
                | ItemGrammar::Comma
                | ItemGrammar::Cjk => LineItem {
                    product: Some(caps[1].trim().to_string()),
                    count: caps[2].parse().unwrap_or(1),
                    unit: Some(caps[3].to_string()),
                    price: caps.get(4).map(|m| m.as_str().to_string()),
                },
                ItemGrammar::PriceOnly => LineItem {
                    product: Some(caps[1].trim().to_string()),
                    count: 1,
                    unit: None,
                    price: Some(caps[2].to_string()),
                },
            };

            debug!(?grammar, line, "recognized line item");
            return Some(item);
        }

        None
    }
}

impl Default for LineItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LineItemExtractor {
    type Output = LineItem;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.scan_region(text)
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}

/// Extract all line items from the text, in order of appearance.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    LineItemExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(product: &str, count: u32, unit: Option<&str>, price: Option<&str>) -> LineItem {
        LineItem {
            product: Some(product.to_string()),
            count,
            unit: unit.map(str::to_string),
            price: price.map(str::to_string),
        }
    }

    #[test]
    fn test_qty_first_grammar() {
        assert_eq!(
            extract_line_items("10 bottles of Wine"),
            vec![item("Wine", 10, Some("bottles"), None)]
        );
    }

    #[test]
    fn test_dashed_grammar() {
        assert_eq!(
            extract_line_items("Wine - 10 bottles - $150.00"),
            vec![item("Wine", 10, Some("bottles"), Some("$150.00"))]
        );
    }

    #[test]
    fn test_parenthetical_grammar() {
        assert_eq!(
            extract_line_items("Wine (10 bottles)"),
            vec![item("Wine", 10, Some("bottles"), None)]
        );
    }

    #[test]
    fn test_multiplicative_grammar() {
        assert_eq!(
            extract_line_items("Wine x 10 bottles - $150.00"),
            vec![item("Wine", 10, Some("bottles"), Some("$150.00"))]
        );
    }

    #[test]
    fn test_comma_grammar() {
        assert_eq!(
            extract_line_items("Wine, 10 bottles, $150.00"),
            vec![item("Wine", 10, Some("bottles"), Some("$150.00"))]
        );
    }

    #[test]
    fn test_cjk_grammar() {
        assert_eq!(
            extract_line_items("ワイン10本 - 1500円"),
            vec![item("ワイン", 10, Some("本"), Some("1500円"))]
        );
    }

    #[test]
    fn test_price_only_fallback_defaults_count() {
        assert_eq!(
            extract_line_items("Wine - $150.00"),
            vec![item("Wine", 1, None, Some("$150.00"))]
        );
    }

    #[test]
    fn test_label_lines_are_not_items() {
        assert!(extract_line_items("Total - $150.00").is_empty());
        assert!(extract_line_items("Amount Due - $150.00").is_empty());
    }

    #[test]
    fn test_items_header_scopes_scan() {
        let text = "Wine - 5 bottles - $99\nItems:\nBeer - 10 cans - $50";
        assert_eq!(
            extract_line_items(text),
            vec![item("Beer", 10, Some("cans"), Some("$50"))]
        );
    }

    #[test]
    fn test_whole_text_fallback_without_header() {
        let text = "Invoice #1\nWine - 5 bottles - $99\nBeer - 10 cans - $50";
        assert_eq!(
            extract_line_items(text),
            vec![
                item("Wine", 5, Some("bottles"), Some("$99")),
                item("Beer", 10, Some("cans"), Some("$50")),
            ]
        );
    }

    #[test]
    fn test_unmatched_lines_skipped() {
        let text = "Items:\nthis line is noise\nWine (2 bottles)\n###\n";
        assert_eq!(
            extract_line_items(text),
            vec![item("Wine", 2, Some("bottles"), None)]
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let text = "Items:\nWine - 5 bottles - $100\n3 cans of Beer\nお茶2箱 - 800円";
        let items = extract_line_items(text);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].product.as_deref(), Some("Wine"));
        assert_eq!(items[1].product.as_deref(), Some("Beer"));
        assert_eq!(items[2].product.as_deref(), Some("お茶"));
    }
}
