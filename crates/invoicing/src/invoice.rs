//! Invoice and its line items.
//!
//! An invoice is created once, complete, and never mutated afterwards. The
//! only way to obtain one is [`Invoice::from_lines`], which computes
//! `total_cost` from the lines with checked arithmetic, so the
//! total-equals-sum-of-lines invariant holds for every instance.

use chrono::{DateTime, Utc};
use serde::Serialize;

use marketbill_core::{
    DomainError, Entity, InvoiceId, ItemId, LineItemId, Money, StoreId, UserId, VendorId,
};

use crate::error::InvoiceError;

/// One line of an invoice: an item, a quantity, and the unit price
/// snapshotted from the catalog at generation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLineItem {
    pub id: LineItemId,
    pub invoice_id: InvoiceId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub unit_cost: Money,
    pub created_at: DateTime<Utc>,
}

impl InvoiceLineItem {
    /// `unit_cost * quantity`, checked.
    pub fn cost(&self) -> Result<Money, DomainError> {
        self.unit_cost.checked_mul_quantity(self.quantity)
    }
}

/// A persisted-shape invoice: header, line items, and final total.
///
/// Immutable append-only record; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    invoice_id: InvoiceId,
    date: DateTime<Utc>,
    vendor_id: VendorId,
    user_id: UserId,
    store_id: StoreId,
    total_cost: Money,
    lines: Vec<InvoiceLineItem>,
}

impl Invoice {
    /// Build a complete invoice from its lines.
    ///
    /// Every line must already carry this invoice's id and a positive
    /// quantity; the total is computed here, never passed in.
    pub fn from_lines(
        invoice_id: InvoiceId,
        date: DateTime<Utc>,
        vendor_id: VendorId,
        user_id: UserId,
        store_id: StoreId,
        lines: Vec<InvoiceLineItem>,
    ) -> Result<Self, InvoiceError> {
        if lines.is_empty() {
            return Err(DomainError::validation("invoice must have at least one line").into());
        }

        let mut total_cost = Money::ZERO;
        for line in &lines {
            if line.invoice_id != invoice_id {
                return Err(DomainError::invariant("line does not belong to this invoice").into());
            }
            if line.quantity == 0 {
                return Err(InvoiceError::NonPositiveQuantity(line.item_id));
            }
            total_cost = total_cost.checked_add(line.cost()?)?;
        }

        Ok(Self {
            invoice_id,
            date,
            vendor_id,
            user_id,
            store_id,
            total_cost,
            lines,
        })
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn vendor_id(&self) -> VendorId {
        self.vendor_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn lines(&self) -> &[InvoiceLineItem] {
        &self.lines
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.invoice_id
    }
}
