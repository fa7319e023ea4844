//! Batch item lookup against the external catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marketbill_core::{ItemId, Money, VendorId};

/// A single catalog record: which vendor sells an item, and at what price.
///
/// Read-only to this system. The `unit_price` observed here is snapshotted
/// into invoice line items; later catalog changes never alter past invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item_id: ItemId,
    pub vendor_id: VendorId,
    pub unit_price: Money,
}

/// Catalog read failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The underlying store could not be reached. Transient; the caller may
    /// retry the whole operation.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read seam over the external catalog.
///
/// ## Contract
///
/// - `item_ids` is deduplicated by the caller.
/// - Returns the subset of requested ids that exist in the catalog; a missing
///   id is **not** an error at this seam (the caller decides what absence
///   means).
/// - Side-effect free.
pub trait CatalogReader {
    fn lookup_items(&self, item_ids: &[ItemId]) -> Result<Vec<CatalogEntry>, CatalogError>;
}
