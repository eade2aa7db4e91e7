//! Inventory update generation from parsed invoices.

mod transformer;

pub use transformer::{InventoryTransformer, Sequence, SuffixSource, SystemClock};
