//! Vendor grouping and invoice construction.
//!
//! The selection is partitioned into per-vendor groups in the order each
//! vendor is first encountered in the input. `IndexMap` gives that stable
//! first-seen iteration order; a plain `HashMap` would not.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use marketbill_catalog::CatalogEntry;
use marketbill_core::{InvoiceId, ItemId, LineItemId, Money, StoreId, UserId, VendorId};

use crate::error::InvoiceError;
use crate::invoice::{Invoice, InvoiceLineItem};
use crate::selection::SelectedItem;

/// A selected item with its catalog price resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PricedItem {
    pub item_id: ItemId,
    pub quantity: u32,
    pub unit_price: Money,
}

/// Index catalog lookup results by item id for O(1) price resolution.
pub fn index_entries(entries: Vec<CatalogEntry>) -> HashMap<ItemId, CatalogEntry> {
    entries.into_iter().map(|e| (e.item_id, e)).collect()
}

/// Partition a validated selection into per-vendor groups.
///
/// Fails with [`InvoiceError::ItemNotFound`] on the first selected item (in
/// selection order) that has no entry in `index` — partial pricing is never
/// returned. Duplicate selected items stay as separate entries in their
/// vendor's group.
pub fn group_by_vendor(
    selection: &[SelectedItem],
    index: &HashMap<ItemId, CatalogEntry>,
) -> Result<IndexMap<VendorId, Vec<PricedItem>>, InvoiceError> {
    let mut groups: IndexMap<VendorId, Vec<PricedItem>> = IndexMap::new();
    for selected in selection {
        let entry = index
            .get(&selected.item_id)
            .ok_or(InvoiceError::ItemNotFound(selected.item_id))?;
        groups.entry(entry.vendor_id).or_default().push(PricedItem {
            item_id: selected.item_id,
            quantity: selected.quantity,
            unit_price: entry.unit_price,
        });
    }
    Ok(groups)
}

/// Materialize one complete invoice per vendor group, in group order.
///
/// Each invoice is fully built in memory — header, lines, and final total
/// together — so no partially-totaled invoice ever exists, even transiently.
pub fn build_vendor_invoices(
    user_id: UserId,
    store_id: StoreId,
    groups: IndexMap<VendorId, Vec<PricedItem>>,
    issued_at: DateTime<Utc>,
) -> Result<Vec<Invoice>, InvoiceError> {
    let mut invoices = Vec::with_capacity(groups.len());
    for (vendor_id, items) in groups {
        let invoice_id = InvoiceId::new();
        let lines = items
            .into_iter()
            .map(|item| InvoiceLineItem {
                id: LineItemId::new(),
                invoice_id,
                item_id: item.item_id,
                quantity: item.quantity,
                unit_cost: item.unit_price,
                created_at: issued_at,
            })
            .collect();
        invoices.push(Invoice::from_lines(
            invoice_id, issued_at, vendor_id, user_id, store_id, lines,
        )?);
    }
    Ok(invoices)
}
