//! Infrastructure layer: invoice persistence, catalog adapters, and the
//! generation pipeline that wires them to the invoicing domain.

pub mod catalog;
pub mod generator;
pub mod invoice_store;

#[cfg(test)]
mod integration_tests;

pub use catalog::InMemoryCatalog;
pub use generator::{GenerateError, InvoiceGenerator};
pub use invoice_store::{InMemoryInvoiceStore, InvoiceStore, InvoiceTransaction, StoreError};
