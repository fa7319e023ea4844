//! Invoice store contract: scoped unit of work with all-or-nothing commit.

use thiserror::Error;

use marketbill_core::InvoiceId;
use marketbill_invoicing::Invoice;

/// Invoice persistence failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (or its lock was poisoned). Transient;
    /// the caller may retry the whole generation call.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The transaction could not commit; none of its staged invoices were
    /// persisted.
    #[error("transaction aborted: {0}")]
    TransactionAborted(String),

    /// An invoice with this id already exists.
    #[error("duplicate invoice id: {0}")]
    DuplicateInvoice(InvoiceId),
}

/// One atomic unit of work against the invoice store.
///
/// Invoices are staged in memory and written only by [`commit`]. Dropping an
/// uncommitted transaction discards every staged invoice — rollback is the
/// default on every early-return path, with no explicit call needed.
///
/// [`commit`]: InvoiceTransaction::commit
pub trait InvoiceTransaction {
    /// Buffer a complete invoice (header + lines + final total) for atomic
    /// insertion at commit time.
    fn stage(&mut self, invoice: Invoice) -> Result<(), StoreError>;

    /// Persist every staged invoice, or none.
    ///
    /// After a failed commit the store must be observably unchanged by this
    /// transaction.
    fn commit(self) -> Result<(), StoreError>;
}

/// Handle to a transactional invoice store.
///
/// Implementations provide isolation between concurrent transactions; the
/// generation pipeline holds no locks of its own.
pub trait InvoiceStore {
    type Tx<'a>: InvoiceTransaction
    where
        Self: 'a;

    /// Open a unit of work.
    fn begin(&self) -> Result<Self::Tx<'_>, StoreError>;
}
