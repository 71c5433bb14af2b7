//! # Slots
//!
//! One storage cell of a machine. A slot holds any number of units, all of
//! the same identity.
//!
//! ## Slot Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Slot State Operations                                │
//! │                                                                         │
//! │  add_unit(unit) ───► empty?            ──► push(unit.duplicate())      │
//! │                      same identifier?  ──► push(unit.duplicate())      │
//! │                      otherwise         ──► IdentifierMismatch          │
//! │                                                                         │
//! │  remove_unit() ────► pop_front()   (FIFO, EmptySlot if none)           │
//! │                                                                         │
//! │  price() / identifier() ──► read from the front unit                   │
//! │                                                                         │
//! │  NOTE: every stored unit is a copy; callers keep their own instance.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;

use crate::error::{VendingError, VendingResult};
use crate::money::Money;
use crate::sellable::Sellable;
use crate::validation::{validate_price, validate_required};

/// A single inventory cell.
///
/// ## Invariants
/// - `units` is empty, or every unit's identifier equals the front unit's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    id: String,
    units: VecDeque<Sellable>,
}

impl Slot {
    /// Creates an empty slot.
    ///
    /// ## Errors
    /// - `Required` if `id` is empty
    pub fn new(id: impl Into<String>) -> VendingResult<Self> {
        let id = id.into();
        validate_required("slot id", &id)?;
        Ok(Slot {
            id,
            units: VecDeque::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Stores a copy of `unit`.
    ///
    /// ## Errors
    /// - `IdentifierMismatch` if the slot already holds a different identity;
    ///   the slot is left unchanged
    pub fn add_unit(&mut self, unit: &Sellable) -> VendingResult<()> {
        if let Some(resident) = self.units.front() {
            if resident.identifier() != unit.identifier() {
                return Err(VendingError::IdentifierMismatch {
                    slot: self.id.clone(),
                    resident: resident.identifier().to_string(),
                    offered: unit.identifier().to_string(),
                });
            }
        }
        self.units.push_back(unit.duplicate());
        Ok(())
    }

    /// Removes and returns the oldest unit.
    ///
    /// ## Errors
    /// - `EmptySlot` if there is nothing to remove
    pub fn remove_unit(&mut self) -> VendingResult<Sellable> {
        self.units
            .pop_front()
            .ok_or_else(|| VendingError::EmptySlot(self.id.clone()))
    }

    /// Price of one unit.
    ///
    /// ## Errors
    /// - `EmptySlot` if the slot holds nothing
    pub fn price(&self) -> VendingResult<Money> {
        self.front().map(Sellable::price)
    }

    /// Identifier shared by every unit.
    ///
    /// ## Errors
    /// - `EmptySlot` if the slot holds nothing
    pub fn identifier(&self) -> VendingResult<&str> {
        self.front().map(Sellable::identifier)
    }

    /// The unit that would be dispensed next.
    pub fn peek(&self) -> Option<&Sellable> {
        self.units.front()
    }

    /// Whether the slot holds the item with `upc`, directly or inside a bundle.
    ///
    /// ## Errors
    /// - `Required` if `upc` is empty
    /// - `EmptySlot` if the slot holds nothing
    /// - `EmptyBundle` if the resident bundle has no members
    pub fn contains_item(&self, upc: &str) -> VendingResult<bool> {
        validate_required("upc", upc)?;
        self.front()?.contains_upc(upc)
    }

    /// Sets the price of the item with `upc` in every unit of the slot.
    ///
    /// Loose items are repriced directly; bundles reprice the matching member.
    ///
    /// ## Errors
    /// - `Required` if `upc` is empty
    /// - `MustBePositive` if `price` is zero or negative
    /// - `EmptySlot` if the slot holds nothing
    pub fn change_price(&mut self, upc: &str, price: Money) -> VendingResult<()> {
        validate_required("upc", upc)?;
        validate_price(price)?;
        if self.units.is_empty() {
            return Err(VendingError::EmptySlot(self.id.clone()));
        }
        for unit in self.units.iter_mut() {
            unit.change_price_for_upc(upc, price)?;
        }
        Ok(())
    }

    fn front(&self) -> VendingResult<&Sellable> {
        self.units
            .front()
            .ok_or_else(|| VendingError::EmptySlot(self.id.clone()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
