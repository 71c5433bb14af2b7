//! # vending-core: Inventory Logic for a Vending Fleet
//!
//! This crate models what a vending machine sells and how its stock moves:
//! single items, bundles of items, the slots that hold them, and the machine
//! grid that routes restock, pricing and purchase operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vending Fleet Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              vending-runtime (config, logging, seed)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vending-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │   item   │  │  bundle  │  │   slot   │  │   machine    │   │   │
//! │  │   │   upc    │─►│ sellable │─►│          │─►│   payment    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                  PaymentHandle │ (external card / wallet)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`upc`] - UPC-A check digit validation
//! - [`item`] / [`bundle`] / [`sellable`] - What a slot can hold
//! - [`slot`] - One inventory cell, one identity
//! - [`machine`] - The slot grid and purchase protocol
//! - [`payment`] - The payment handle seam
//! - [`error`] / [`validation`] - Typed errors and argument checks
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vending_core::{Item, Machine, Money, PrepaidCard};
//!
//! let mut machine = Machine::new("VM-1", 2, 2)?;
//! let expiry = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
//! let soda = Item::new("Soda", "036000291452", Money::from_cents(150), expiry)?;
//!
//! machine.restock("A0", &soda.into())?;
//!
//! let mut card = PrepaidCard::new("pin", Money::from_cents(200));
//! machine.purchase("A0", &mut card, "pin")?;
//!
//! assert_eq!(card.balance(), Money::from_cents(50));
//! assert!(machine.is_slot_empty("A0")?);
//! # Ok::<(), vending_core::VendingError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bundle;
pub mod error;
pub mod item;
pub mod machine;
pub mod money;
pub mod payment;
pub mod sellable;
pub mod slot;
pub mod upc;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bundle::Bundle;
pub use error::{ErrorKind, PaymentError, ValidationError, VendingError, VendingResult};
pub use item::Item;
pub use machine::{Machine, SlotReport};
pub use money::Money;
pub use payment::{PaymentHandle, PrepaidCard};
pub use sellable::{Sellable, SellableKind};
pub use slot::Slot;
