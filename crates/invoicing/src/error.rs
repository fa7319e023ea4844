//! Invoicing domain errors.

use thiserror::Error;

use marketbill_core::{DomainError, ItemId};

/// Deterministic invoicing failure.
///
/// Everything here is decidable from the inputs alone; transient
/// infrastructure failures (catalog, store) are not represented at this
/// layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    /// The selection contained no items at all.
    #[error("selection is empty")]
    EmptySelection,

    /// A selected item carried a zero quantity.
    #[error("quantity for item {0} must be positive")]
    NonPositiveQuantity(ItemId),

    /// A selected item has no catalog entry, so its price cannot be resolved.
    /// Aborts the whole generation call; partial invoicing is not permitted.
    #[error("item {0} has no catalog entry")]
    ItemNotFound(ItemId),

    /// A core domain failure (e.g. monetary overflow while totaling).
    #[error(transparent)]
    Domain(#[from] DomainError),
}
