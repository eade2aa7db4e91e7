//! Transformation of parsed invoices into inventory updates.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::debug;

use crate::models::inventory::{
    InventoryItem, InventoryUpdate, UpdateAction, DEFAULT_UNIT, UNKNOWN_PRODUCT,
};
use crate::models::invoice::{LineItem, ParsedInvoice};

/// Slug portion used when the product name is the unknown sentinel.
const UNNAMED_SLUG: &str = "item";

/// Source of SKU suffixes.
///
/// Injected into the transformer so production code can use wall-clock
/// time while tests use a deterministic counter. Implementations must
/// return a distinct suffix on every call within a process.
pub trait SuffixSource {
    fn next_suffix(&self) -> String;
}

/// Wall-clock suffix source.
///
/// Uses the current time in microseconds, pushed past the last issued
/// value, so two items transformed within the same clock tick still get
/// distinct suffixes.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SuffixSource for SystemClock {
    fn next_suffix(&self) -> String {
        let now = Utc::now().timestamp_micros().max(0) as u64;
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Deterministic counting suffix source, for tests.
#[derive(Debug, Default)]
pub struct Sequence {
    counter: AtomicU64,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SuffixSource for Sequence {
    fn next_suffix(&self) -> String {
        (self.counter.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

/// Transformer from [`ParsedInvoice`] to [`InventoryUpdate`].
pub struct InventoryTransformer<S: SuffixSource = SystemClock> {
    suffixes: S,
}

impl InventoryTransformer<SystemClock> {
    /// Create a transformer backed by the wall clock.
    pub fn new() -> Self {
        Self {
            suffixes: SystemClock::new(),
        }
    }
}

impl Default for InventoryTransformer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SuffixSource> InventoryTransformer<S> {
    /// Create a transformer with an explicit suffix source.
    pub fn with_source(suffixes: S) -> Self {
        Self { suffixes }
    }

    /// Reduce a parsed invoice to an inventory-update instruction.
    ///
    /// An absent invoice yields an empty "add" update with no date. The
    /// date is copied from the invoice when one was recognized; falling
    /// back to "now" is left to the caller.
    pub fn to_update(&self, parsed: Option<&ParsedInvoice>) -> InventoryUpdate {
        let Some(parsed) = parsed else {
            return InventoryUpdate {
                action: UpdateAction::Add,
                date: None,
                items: Vec::new(),
            };
        };

        let items: Vec<InventoryItem> = parsed
            .items
            .iter()
            .map(|line| self.to_inventory_item(line))
            .collect();

        debug!(
            item_count = items.len(),
            date = parsed.invoice_date.as_deref(),
            "built inventory update"
        );

        InventoryUpdate {
            action: UpdateAction::Add,
            date: parsed.invoice_date.clone(),
            items,
        }
    }

    fn to_inventory_item(&self, line: &LineItem) -> InventoryItem {
        let name = line
            .product
            .clone()
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        let slug = if name == UNKNOWN_PRODUCT {
            UNNAMED_SLUG.to_string()
        } else {
            slugify(&name)
        };

        InventoryItem {
            sku: format!("{}-{}", slug, self.suffixes.next_suffix()),
            name,
            quantity: line.count,
            unit: line
                .unit
                .clone()
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        }
    }
}

/// Lowercase the name and collapse whitespace runs into single hyphens.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
