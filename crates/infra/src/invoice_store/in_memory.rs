//! In-memory invoice store.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use marketbill_core::{InvoiceId, UserId};
use marketbill_invoicing::Invoice;

use super::r#trait::{InvoiceStore, InvoiceTransaction, StoreError};

/// Append-only invoice map behind a single write lock.
///
/// The write lock serializes commits, so no two transactions interleave
/// writes; staged invoices are validated against existing state before any
/// insertion, so a failed commit leaves the map untouched.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceStore {
    invoices: RwLock<HashMap<InvoiceId, Invoice>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted invoices.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read_lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read_lock()?.is_empty())
    }

    pub fn get(&self, invoice_id: InvoiceId) -> Result<Option<Invoice>, StoreError> {
        Ok(self.read_lock()?.get(&invoice_id).cloned())
    }

    /// All invoices created for a user, in no particular order.
    pub fn invoices_for_user(&self, user_id: UserId) -> Result<Vec<Invoice>, StoreError> {
        Ok(self
            .read_lock()?
            .values()
            .filter(|inv| inv.user_id() == user_id)
            .cloned()
            .collect())
    }

    fn read_lock(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<InvoiceId, Invoice>>, StoreError> {
        self.invoices
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl InvoiceStore for InMemoryInvoiceStore {
    type Tx<'a> = InMemoryTransaction<'a>;

    fn begin(&self) -> Result<Self::Tx<'_>, StoreError> {
        Ok(InMemoryTransaction {
            store: self,
            staged: Vec::new(),
        })
    }
}

/// Unit of work over [`InMemoryInvoiceStore`].
///
/// Nothing touches the shared map until `commit`; dropping the transaction
/// simply drops the staged buffer.
#[derive(Debug)]
pub struct InMemoryTransaction<'a> {
    store: &'a InMemoryInvoiceStore,
    staged: Vec<Invoice>,
}

impl InvoiceTransaction for InMemoryTransaction<'_> {
    fn stage(&mut self, invoice: Invoice) -> Result<(), StoreError> {
        if self.staged.iter().any(|i| i.invoice_id() == invoice.invoice_id()) {
            return Err(StoreError::DuplicateInvoice(invoice.invoice_id()));
        }
        self.staged.push(invoice);
        Ok(())
    }

    fn commit(self) -> Result<(), StoreError> {
        if self.staged.is_empty() {
            return Ok(());
        }

        let mut invoices = self
            .store
            .invoices
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        // Validate the whole batch before mutating anything.
        for invoice in &self.staged {
            if invoices.contains_key(&invoice.invoice_id()) {
                return Err(StoreError::DuplicateInvoice(invoice.invoice_id()));
            }
        }

        for invoice in self.staged {
            invoices.insert(invoice.invoice_id(), invoice);
        }

        Ok(())
    }
}
