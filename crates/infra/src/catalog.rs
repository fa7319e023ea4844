//! In-memory catalog adapter.
//!
//! Intended for tests/dev; a production deployment would back
//! [`CatalogReader`] with the real catalog datastore.

use std::collections::HashMap;
use std::sync::RwLock;

use marketbill_catalog::{CatalogEntry, CatalogError, CatalogReader};
use marketbill_core::ItemId;

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: RwLock<HashMap<ItemId, CatalogEntry>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: RwLock::new(entries.into_iter().map(|e| (e.item_id, e)).collect()),
        }
    }

    /// Insert or replace an entry. Price changes here never affect invoices
    /// generated earlier; line items hold snapshots.
    pub fn upsert(&self, entry: CatalogEntry) -> Result<(), CatalogError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;
        entries.insert(entry.item_id, entry);
        Ok(())
    }
}

impl CatalogReader for InMemoryCatalog {
    fn lookup_items(&self, item_ids: &[ItemId]) -> Result<Vec<CatalogEntry>, CatalogError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;
        Ok(item_ids
            .iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use marketbill_core::{Money, VendorId};

    use super::*;

    fn entry(item_id: ItemId) -> CatalogEntry {
        CatalogEntry {
            item_id,
            vendor_id: VendorId::new(),
            unit_price: Money::from_minor(100),
        }
    }

    #[test]
    fn lookup_returns_only_matching_subset() {
        let known = ItemId::new();
        let unknown = ItemId::new();
        let catalog = InMemoryCatalog::with_entries([entry(known)]);

        let found = catalog.lookup_items(&[known, unknown]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item_id, known);
    }

    #[test]
    fn upsert_replaces_price_for_future_lookups() {
        let item_id = ItemId::new();
        let catalog = InMemoryCatalog::with_entries([entry(item_id)]);

        let mut updated = entry(item_id);
        updated.unit_price = Money::from_minor(250);
        catalog.upsert(updated).unwrap();

        let found = catalog.lookup_items(&[item_id]).unwrap();
        assert_eq!(found[0].unit_price, Money::from_minor(250));
    }
}
