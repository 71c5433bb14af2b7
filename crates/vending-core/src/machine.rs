//! # Machines
//!
//! A vending machine is a fixed grid of [`Slot`]s plus the operations that
//! route to them: restock, pricing, purchase and emptiness queries.
//!
//! ## Grid Layout
//! ```text
//! Machine::new("VM-1", 3, 2)
//!
//!            column A   column B   column C
//!   row 0  ┌─────────┬─────────┬─────────┐
//!          │   A0    │   B0    │   C0    │
//!   row 1  ├─────────┼─────────┼─────────┤
//!          │   A1    │   B1    │   C1    │
//!          └─────────┴─────────┴─────────┘
//!
//! Columns are lettered A..Z (at most 26), rows are numbered from 0.
//! Every slot exists from construction on; only its contents change.
//! ```
//!
//! ## Concurrency
//! Operations take `&mut self` and run to completion. A caller sharing one
//! machine between threads wraps it in a `Mutex`, one lock per machine.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{VendingError, VendingResult};
use crate::money::Money;
use crate::payment::PaymentHandle;
use crate::sellable::{Sellable, SellableKind};
use crate::slot::Slot;
use crate::validation::{validate_columns, validate_price, validate_required, validate_rows};

/// A vending machine: an identifier, an in-service flag and a slot grid.
#[derive(Debug, Clone)]
pub struct Machine {
    id: String,
    operative: bool,
    /// Column-major: `grid[column][row]`.
    grid: Vec<Vec<Slot>>,
}

/// One row of [`Machine::inventory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotReport {
    pub slot: String,
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub kind: Option<SellableKind>,
    pub units: usize,
    pub price: Option<Money>,
}

impl Machine {
    /// Builds a machine with `columns × rows` empty slots.
    ///
    /// The machine starts in service.
    ///
    /// ## Errors
    /// - `Required` if `id` is empty
    /// - `OutOfRange` if `columns` is not in 1..=26
    /// - `MustBePositive` if `rows` is zero
    pub fn new(id: impl Into<String>, columns: usize, rows: usize) -> VendingResult<Self> {
        let id = id.into();
        validate_required("machine id", &id)?;
        validate_columns(columns)?;
        validate_rows(rows)?;

        let grid = (0..columns)
            .map(|column| {
                let letter = char::from(b'A' + column as u8);
                (0..rows)
                    .map(|row| Slot::new(format!("{letter}{row}")))
                    .collect::<VendingResult<Vec<_>>>()
            })
            .collect::<VendingResult<Vec<_>>>()?;

        debug!(machine = %id, columns, rows, "Machine grid created");

        Ok(Machine {
            id,
            operative: true,
            grid,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the machine is in service.
    ///
    /// The flag is informational; no operation checks it.
    pub fn is_operative(&self) -> bool {
        self.operative
    }

    /// Switches the machine in or out of service.
    pub fn toggle_operative(&mut self) {
        self.operative = !self.operative;
        debug!(machine = %self.id, operative = self.operative, "Service state toggled");
    }

    pub fn columns(&self) -> usize {
        self.grid.len()
    }

    pub fn rows(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Iterates over every slot, column by column.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.grid.iter().flatten()
    }

    /// Looks up a slot by its label.
    ///
    /// ## Errors
    /// - `Required` if `slot_id` is empty
    /// - `SlotNotFound` if no slot carries that label
    pub fn slot(&self, slot_id: &str) -> VendingResult<&Slot> {
        validate_required("slot id", slot_id)?;
        self.slots()
            .find(|slot| slot.id() == slot_id)
            .ok_or_else(|| VendingError::SlotNotFound(slot_id.to_string()))
    }

    fn slot_mut(&mut self, slot_id: &str) -> VendingResult<&mut Slot> {
        validate_required("slot id", slot_id)?;
        self.grid
            .iter_mut()
            .flatten()
            .find(|slot| slot.id() == slot_id)
            .ok_or_else(|| VendingError::SlotNotFound(slot_id.to_string()))
    }

    // =========================================================================
    // Restock
    // =========================================================================

    /// Adds one copy of `unit` to a slot.
    ///
    /// ## Errors
    /// - `SlotNotFound` if the slot does not exist
    /// - `IdentifierMismatch` if the slot holds a different identity
    pub fn restock(&mut self, slot_id: &str, unit: &Sellable) -> VendingResult<()> {
        let slot = self.slot_mut(slot_id)?;
        slot.add_unit(unit)?;
        debug!(slot = %slot_id, identifier = %unit.identifier(), units = slot.unit_count(), "Slot restocked");
        Ok(())
    }

    /// Adds a copy of each unit in `units` to a slot.
    ///
    /// Every unit must share one identifier, which in turn must match the
    /// slot's resident identity if it is not empty. Nothing is stored unless
    /// the whole batch is accepted.
    ///
    /// ## Errors
    /// - `SlotNotFound` if the slot does not exist
    /// - `EmptyBatch` if `units` is empty
    /// - `MixedBatch` if two units differ in identifier
    /// - `IdentifierMismatch` if the slot holds a different identity
    pub fn restock_many(&mut self, slot_id: &str, units: &[Sellable]) -> VendingResult<()> {
        let slot = self.slot_mut(slot_id)?;

        let first = units.first().ok_or(VendingError::EmptyBatch)?;
        if let Some(other) = units.iter().find(|u| u.identifier() != first.identifier()) {
            return Err(VendingError::MixedBatch {
                first: first.identifier().to_string(),
                other: other.identifier().to_string(),
            });
        }

        for unit in units {
            slot.add_unit(unit)?;
        }
        debug!(
            slot = %slot_id,
            identifier = %first.identifier(),
            added = units.len(),
            units = slot.unit_count(),
            "Slot restocked in batch"
        );
        Ok(())
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Price of one unit in a slot.
    ///
    /// ## Errors
    /// - `SlotNotFound` if the slot does not exist
    /// - `EmptySlot` if the slot holds nothing
    pub fn price_at(&self, slot_id: &str) -> VendingResult<Money> {
        self.slot(slot_id)?.price()
    }

    /// Reprices the item with `upc` in every slot that holds it, loose or
    /// inside a bundle.
    ///
    /// Matching no slot at all is not an error.
    ///
    /// ## Errors
    /// - `Required` if `upc` is empty
    /// - `MustBePositive` if `price` is zero or negative
    pub fn change_price_by_identifier(&mut self, upc: &str, price: Money) -> VendingResult<()> {
        validate_required("upc", upc)?;
        validate_price(price)?;

        // A slot whose bundle has no members simply does not match.
        let mut repriced = 0usize;
        for slot in self.grid.iter_mut().flatten() {
            if matches!(slot.contains_item(upc), Ok(true)) {
                slot.change_price(upc, price)?;
                repriced += 1;
            }
        }

        debug!(upc = %upc, price = %price, slots = repriced, "Price changed");
        Ok(())
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Sells one unit from a slot, paid through `payment`.
    ///
    /// Availability and funds are checked first, then the payment is
    /// debited, and only then is the unit removed and returned. A failure
    /// at any step leaves both the slot and the balance untouched.
    ///
    /// ## Errors
    /// - `Required` if `slot_id` or `credential` is empty
    /// - `SlotNotFound` if the slot does not exist
    /// - `EmptySlot` if the slot holds nothing
    /// - `InsufficientFunds` if the balance is below the price
    /// - `Payment` if the handle fails to report a balance or to debit
    pub fn purchase<P>(
        &mut self,
        slot_id: &str,
        payment: &mut P,
        credential: &str,
    ) -> VendingResult<Sellable>
    where
        P: PaymentHandle + ?Sized,
    {
        validate_required("credential", credential)?;
        let slot = self.slot_mut(slot_id)?;

        let price = slot.price()?;
        let balance = payment.current_balance()?;
        if balance < price {
            warn!(slot = %slot_id, price = %price, balance = %balance, "Purchase rejected: insufficient funds");
            return Err(VendingError::InsufficientFunds { price, balance });
        }

        if let Err(err) = payment.debit(credential, price) {
            warn!(slot = %slot_id, price = %price, error = %err, "Purchase rejected: debit failed");
            return Err(err.into());
        }

        let unit = slot.remove_unit()?;
        debug!(
            slot = %slot_id,
            identifier = %unit.identifier(),
            price = %price,
            remaining = slot.unit_count(),
            "Unit sold"
        );
        Ok(unit)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether any slot in the grid is empty.
    pub fn has_empty_slot(&self) -> bool {
        self.slots().any(Slot::is_empty)
    }

    /// Whether a slot is empty.
    ///
    /// ## Errors
    /// - `SlotNotFound` if the slot does not exist
    pub fn is_slot_empty(&self, slot_id: &str) -> VendingResult<bool> {
        Ok(self.slot(slot_id)?.is_empty())
    }

    /// A snapshot of every slot's contents, column by column.
    pub fn inventory(&self) -> Vec<SlotReport> {
        self.slots()
            .map(|slot| {
                let front = slot.peek();
                SlotReport {
                    slot: slot.id().to_string(),
                    identifier: front.map(|u| u.identifier().to_string()),
                    name: front.map(|u| u.name().to_string()),
                    kind: front.map(Sellable::kind),
                    units: slot.unit_count(),
                    price: front.map(Sellable::price),
                }
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
