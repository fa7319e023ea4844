//! Integration tests for the full generation pipeline.
//!
//! Tests: selection → CatalogReader → grouping → InvoiceStore transaction
//!
//! Verifies:
//! - One invoice per distinct vendor, totals conserved
//! - All-or-nothing failure semantics (store unchanged on any error)
//! - Error taxonomy surfaced with offending identifiers

use marketbill_catalog::{CatalogEntry, CatalogError, CatalogReader};
use marketbill_core::{InvoiceId, ItemId, Money, StoreId, UserId, VendorId};
use marketbill_invoicing::SelectedItem;

use crate::catalog::InMemoryCatalog;
use crate::generator::{GenerateError, InvoiceGenerator};
use crate::invoice_store::InMemoryInvoiceStore;

/// Catalog stub whose every lookup fails. Doubles as a probe: if an
/// operation that must not touch the catalog did, the error taxonomy would
/// show `CatalogUnavailable` instead of the expected input error.
struct FailingCatalog;

impl CatalogReader for FailingCatalog {
    fn lookup_items(&self, _item_ids: &[ItemId]) -> Result<Vec<CatalogEntry>, CatalogError> {
        Err(CatalogError::Unavailable("backend offline".to_string()))
    }
}

fn entry(item_id: ItemId, vendor_id: VendorId, unit_minor: u64) -> CatalogEntry {
    CatalogEntry {
        item_id,
        vendor_id,
        unit_price: Money::from_minor(unit_minor),
    }
}

fn selected(item_id: ItemId, quantity: u32) -> SelectedItem {
    SelectedItem { item_id, quantity }
}

fn generator(
    entries: Vec<CatalogEntry>,
) -> InvoiceGenerator<InMemoryCatalog, InMemoryInvoiceStore> {
    marketbill_observability::init();
    InvoiceGenerator::new(
        InMemoryCatalog::with_entries(entries),
        InMemoryInvoiceStore::new(),
    )
}

#[test]
fn one_invoice_per_vendor_with_conserved_totals() {
    let (a, b, c) = (ItemId::new(), ItemId::new(), ItemId::new());
    let (v1, v2) = (VendorId::new(), VendorId::new());
    let generator = generator(vec![
        entry(a, v1, 1000),
        entry(b, v2, 500),
        entry(c, v1, 250),
    ]);
    let user_id = UserId::new();

    let invoices = generator
        .generate_invoices(
            user_id,
            StoreId::new(),
            &[selected(a, 2), selected(b, 1), selected(c, 4)],
        )
        .unwrap();

    assert_eq!(invoices.len(), 2);
    // First-seen vendor order: v1 (items a, c), then v2 (item b).
    assert_eq!(invoices[0].vendor_id(), v1);
    assert_eq!(invoices[0].total_cost(), Money::from_minor(2 * 1000 + 4 * 250));
    assert_eq!(invoices[0].lines().len(), 2);
    assert_eq!(invoices[1].vendor_id(), v2);
    assert_eq!(invoices[1].total_cost(), Money::from_minor(500));

    let grand_total: u64 = invoices.iter().map(|i| i.total_cost().minor()).sum();
    assert_eq!(grand_total, 2 * 1000 + 500 + 4 * 250);

    // Returned invoices match persisted state.
    let store = generator.store();
    assert_eq!(store.len().unwrap(), 2);
    for invoice in &invoices {
        assert_eq!(store.get(invoice.invoice_id()).unwrap().as_ref(), Some(invoice));
    }
    assert_eq!(store.invoices_for_user(user_id).unwrap().len(), 2);
}

#[test]
fn same_vendor_items_share_a_single_invoice() {
    let (a, b) = (ItemId::new(), ItemId::new());
    let v = VendorId::new();
    let generator = generator(vec![entry(a, v, 1000), entry(b, v, 500)]);

    let invoices = generator
        .generate_invoices(UserId::new(), StoreId::new(), &[selected(a, 2), selected(b, 1)])
        .unwrap();

    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].vendor_id(), v);
    assert_eq!(invoices[0].total_cost(), Money::from_minor(2500));
    assert_eq!(invoices[0].lines().len(), 2);
}

#[test]
fn missing_item_persists_nothing() {
    let known = ItemId::new();
    let unknown = ItemId::new();
    let generator = generator(vec![entry(known, VendorId::new(), 1000)]);

    let err = generator
        .generate_invoices(
            UserId::new(),
            StoreId::new(),
            &[selected(known, 1), selected(unknown, 2)],
        )
        .unwrap_err();

    assert_eq!(err, GenerateError::ItemNotFound(unknown));
    assert!(generator.store().is_empty().unwrap());
}

#[test]
fn entirely_unknown_selection_reports_no_items_found() {
    let generator = generator(vec![]);

    let err = generator
        .generate_invoices(UserId::new(), StoreId::new(), &[selected(ItemId::new(), 1)])
        .unwrap_err();

    assert_eq!(err, GenerateError::NoItemsFound);
    assert!(generator.store().is_empty().unwrap());
}

#[test]
fn empty_selection_is_rejected_before_any_catalog_access() {
    marketbill_observability::init();
    let store = InMemoryInvoiceStore::new();
    let generator = InvoiceGenerator::new(FailingCatalog, store);

    let err = generator
        .generate_invoices(UserId::new(), StoreId::new(), &[])
        .unwrap_err();

    // FailingCatalog would have produced CatalogUnavailable if touched.
    assert_eq!(err, GenerateError::InvalidInput("selection is empty".to_string()));
    assert!(generator.store().is_empty().unwrap());
}

#[test]
fn zero_quantity_is_rejected_as_invalid_input() {
    let item_id = ItemId::new();
    let generator = generator(vec![entry(item_id, VendorId::new(), 1000)]);

    let err = generator
        .generate_invoices(UserId::new(), StoreId::new(), &[selected(item_id, 0)])
        .unwrap_err();

    assert!(matches!(err, GenerateError::InvalidInput(_)));
    assert!(generator.store().is_empty().unwrap());
}

#[test]
fn catalog_outage_surfaces_as_retryable_error() {
    marketbill_observability::init();
    let generator = InvoiceGenerator::new(FailingCatalog, InMemoryInvoiceStore::new());

    let err = generator
        .generate_invoices(UserId::new(), StoreId::new(), &[selected(ItemId::new(), 1)])
        .unwrap_err();

    assert_eq!(
        err,
        GenerateError::CatalogUnavailable("backend offline".to_string())
    );
    assert!(generator.store().is_empty().unwrap());
}

#[test]
fn repeated_calls_create_independent_invoices() {
    let item_id = ItemId::new();
    let generator = generator(vec![entry(item_id, VendorId::new(), 1000)]);
    let user_id = UserId::new();
    let store_id = StoreId::new();
    let selection = [selected(item_id, 1)];

    let first = generator
        .generate_invoices(user_id, store_id, &selection)
        .unwrap();
    let second = generator
        .generate_invoices(user_id, store_id, &selection)
        .unwrap();

    let first_ids: Vec<InvoiceId> = first.iter().map(|i| i.invoice_id()).collect();
    let second_ids: Vec<InvoiceId> = second.iter().map(|i| i.invoice_id()).collect();
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
    assert_eq!(generator.store().len().unwrap(), 2);
}

#[test]
fn line_items_snapshot_prices_at_generation_time() {
    let item_id = ItemId::new();
    let vendor_id = VendorId::new();
    let catalog = InMemoryCatalog::with_entries([entry(item_id, vendor_id, 1000)]);
    marketbill_observability::init();
    let generator = InvoiceGenerator::new(catalog, InMemoryInvoiceStore::new());

    let invoices = generator
        .generate_invoices(UserId::new(), StoreId::new(), &[selected(item_id, 1)])
        .unwrap();
    let invoice_id = invoices[0].invoice_id();

    // A later catalog price change must not alter the persisted invoice.
    generator
        .catalog()
        .upsert(entry(item_id, vendor_id, 9999))
        .unwrap();

    let persisted = generator.store().get(invoice_id).unwrap().unwrap();
    assert_eq!(persisted.lines()[0].unit_cost, Money::from_minor(1000));
    assert_eq!(persisted.total_cost(), Money::from_minor(1000));
}
