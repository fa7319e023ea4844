//! Invoice generation pipeline (application-level orchestration).
//!
//! `InvoiceGenerator` turns one user selection into one persisted invoice per
//! vendor:
//!
//! ```text
//! (user_id, store_id, selection)
//!   ↓
//! 1. Validate input (no catalog/store access on rejection)
//!   ↓
//! 2. Open a store transaction (unit of work)
//!   ↓
//! 3. Look up catalog entries for the distinct item ids
//!   ↓
//! 4. Group the selection by vendor, first-seen order
//!   ↓
//! 5. Build every invoice completely in memory (header + lines + total)
//!   ↓
//! 6. Stage all invoices, commit once
//! ```
//!
//! The whole call is all-or-nothing: any failure in steps 3–6, for any
//! vendor, returns early and drops the uncommitted transaction, so no
//! invoice from this call is ever persisted alone. Retry is the caller's
//! responsibility; nothing here retries internally.
//!
//! This module contains no IO itself; it composes the `CatalogReader` and
//! `InvoiceStore` traits.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use marketbill_catalog::{CatalogError, CatalogReader};
use marketbill_core::{ItemId, StoreId, UserId};
use marketbill_invoicing::{
    Invoice, InvoiceError, SelectedItem, build_vendor_invoices, distinct_item_ids, group_by_vendor,
    index_entries, validate_selection,
};

use crate::invoice_store::{InvoiceStore, InvoiceTransaction, StoreError};

/// Invoice generation failure.
///
/// The taxonomy callers report on: deterministic input problems keep the
/// offending identifier where there is one; transient infrastructure
/// failures are marked retryable in their docs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Empty selection or non-positive quantity; rejected before any catalog
    /// or store access.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// None of the requested item ids exist in the catalog.
    #[error("no catalog entries found for the selected items")]
    NoItemsFound,

    /// A specific selected item has no catalog entry; the whole call fails.
    #[error("item {0} has no catalog entry")]
    ItemNotFound(ItemId),

    /// The catalog could not be reached. Retryable.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The invoice store could not be reached. Retryable.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store could not commit; no invoices from this call exist.
    #[error("transaction aborted: {0}")]
    TransactionAborted(String),
}

impl From<InvoiceError> for GenerateError {
    fn from(value: InvoiceError) -> Self {
        match value {
            InvoiceError::ItemNotFound(item_id) => GenerateError::ItemNotFound(item_id),
            // Empty selection, zero quantity, monetary overflow: all
            // deterministic input problems.
            other => GenerateError::InvalidInput(other.to_string()),
        }
    }
}

impl From<CatalogError> for GenerateError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::Unavailable(msg) => GenerateError::CatalogUnavailable(msg),
        }
    }
}

impl From<StoreError> for GenerateError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Unavailable(msg) => GenerateError::StoreUnavailable(msg),
            StoreError::TransactionAborted(msg) => GenerateError::TransactionAborted(msg),
            StoreError::DuplicateInvoice(id) => {
                GenerateError::TransactionAborted(format!("duplicate invoice id: {id}"))
            }
        }
    }
}

/// Vendor-grouped invoice generation over a catalog and a transactional
/// store.
///
/// ## Generic Parameters
///
/// - `C`: catalog reader implementation
/// - `S`: invoice store implementation
///
/// In tests both are in-memory; a deployment swaps in real backends without
/// touching the domain code.
#[derive(Debug)]
pub struct InvoiceGenerator<C, S> {
    catalog: C,
    store: S,
}

impl<C, S> InvoiceGenerator<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (C, S) {
        (self.catalog, self.store)
    }
}

impl<C, S> InvoiceGenerator<C, S>
where
    C: CatalogReader,
    S: InvoiceStore,
{
    /// Generate one invoice per vendor represented in `selection`.
    ///
    /// Returns the created invoices (with their line items) in first-seen
    /// vendor order. Two identical calls produce two independent invoice
    /// sets with distinct ids; there is no idempotency across calls.
    pub fn generate_invoices(
        &self,
        user_id: UserId,
        store_id: StoreId,
        selection: &[SelectedItem],
    ) -> Result<Vec<Invoice>, GenerateError> {
        validate_selection(selection)?;

        // Unit of work: every `?` below drops `tx`, discarding staged writes.
        let mut tx = self.store.begin()?;

        let item_ids = distinct_item_ids(selection);
        let entries = self.catalog.lookup_items(&item_ids)?;
        if entries.is_empty() {
            return Err(GenerateError::NoItemsFound);
        }
        debug!(
            requested = item_ids.len(),
            resolved = entries.len(),
            "resolved catalog entries"
        );

        let index = index_entries(entries);
        let groups = group_by_vendor(selection, &index)?;
        let invoices = build_vendor_invoices(user_id, store_id, groups, Utc::now())?;

        for invoice in &invoices {
            tx.stage(invoice.clone())?;
        }
        tx.commit()?;

        info!(
            user_id = %user_id,
            store_id = %store_id,
            invoices = invoices.len(),
            "generated vendor invoices"
        );
        Ok(invoices)
    }
}
