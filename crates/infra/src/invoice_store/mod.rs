//! Transactional invoice persistence boundary.
//!
//! This module defines the unit-of-work abstraction for writing invoices
//! without making any storage assumptions, plus an in-memory implementation
//! for tests and development.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryInvoiceStore;
pub use r#trait::{InvoiceStore, InvoiceTransaction, StoreError};
