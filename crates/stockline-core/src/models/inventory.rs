//! Inventory update models produced from parsed invoices.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sentinel name for items whose product could not be recognized.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Sentinel unit for items without a recognized unit token.
pub const DEFAULT_UNIT: &str = "each";

/// An inventory mutation instruction derived from one invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    /// Kind of mutation. Invoices only ever add stock.
    pub action: UpdateAction,

    /// Effective date, copied from the invoice date when one was
    /// recognized. Caller-level fallback to "now" is not this layer's job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Stock entries, one per recognized line item, in invoice order.
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

impl InventoryUpdate {
    /// Serialize as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Inventory mutation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    /// Add stock.
    #[default]
    Add,
}

/// One stock entry inside an [`InventoryUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Synthetic stock-keeping key. Always non-empty and unique within the
    /// transformation call that produced it.
    pub sku: String,

    /// Product name, or [`UNKNOWN_PRODUCT`] when the source line had none.
    pub name: String,

    /// Quantity to add.
    pub quantity: u32,

    /// Unit of measure, or [`DEFAULT_UNIT`] when the source line had none.
    pub unit: String,
}
