//! `marketbill-catalog` — the read-only catalog contract.
//!
//! The catalog is an external collaborator: it owns the item → vendor → price
//! mapping and this crate only defines the read seam the invoicing core
//! consumes. No implementation or state lives here.

pub mod reader;

pub use reader::{CatalogEntry, CatalogError, CatalogReader};
