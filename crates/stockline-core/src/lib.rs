//! Core library for invoice text extraction.
//!
//! This crate provides:
//! - Field extraction from OCR-produced invoice text (invoice ID, date,
//!   line items, total, currency) via ordered regex pattern catalogs
//! - Date normalization to `YYYY-MM-DD` for Western numeric notations
//! - Transformation of parsed invoices into inventory-update records with
//!   synthetic SKU generation
//!
//! Extraction is deterministic, synchronous and total: malformed input
//! produces the "nothing recognized" record instead of an error.

pub mod error;
pub mod inventory;
pub mod invoice;
pub mod models;

pub use error::{Result, StocklineError};
pub use inventory::{InventoryTransformer, Sequence, SuffixSource, SystemClock};
pub use invoice::{InvoiceTextParser, TextParser};
pub use models::inventory::{InventoryItem, InventoryUpdate, UpdateAction};
pub use models::invoice::{Currency, LineItem, ParsedInvoice};
