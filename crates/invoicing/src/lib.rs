//! `marketbill-invoicing` — invoicing domain module.
//!
//! This crate contains the business rules for turning a priced selection into
//! per-vendor invoices, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage). Orchestration against a catalog and a
//! transactional store lives in `marketbill-infra`.

pub mod error;
pub mod grouping;
pub mod invoice;
pub mod selection;

pub use error::InvoiceError;
pub use grouping::{PricedItem, build_vendor_invoices, group_by_vendor, index_entries};
pub use invoice::{Invoice, InvoiceLineItem};
pub use selection::{SelectedItem, distinct_item_ids, validate_selection};
