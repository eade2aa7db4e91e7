//! Data models for parsed invoices and inventory updates.

pub mod inventory;
pub mod invoice;

pub use inventory::{InventoryItem, InventoryUpdate, UpdateAction};
pub use invoice::{Currency, LineItem, ParsedInvoice};
