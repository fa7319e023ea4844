//! Selection input: what the user picked, and how many of each.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use marketbill_core::ItemId;

use crate::error::InvoiceError;

/// One entry of a user's selection. Transient input; never persisted as-is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItem {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Validate a selection before any catalog or store access.
///
/// Rejects an empty selection and zero quantities. Duplicate item ids are
/// allowed; each selected entry becomes its own invoice line.
pub fn validate_selection(selection: &[SelectedItem]) -> Result<(), InvoiceError> {
    if selection.is_empty() {
        return Err(InvoiceError::EmptySelection);
    }
    for item in selection {
        if item.quantity == 0 {
            return Err(InvoiceError::NonPositiveQuantity(item.item_id));
        }
    }
    Ok(())
}

/// Distinct item ids of a selection, preserving first-seen order.
pub fn distinct_item_ids(selection: &[SelectedItem]) -> Vec<ItemId> {
    let mut seen = HashSet::new();
    selection
        .iter()
        .map(|s| s.item_id)
        .filter(|id| seen.insert(*id))
        .collect()
}
