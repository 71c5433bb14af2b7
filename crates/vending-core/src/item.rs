//! # Items
//!
//! A single sellable product: name, UPC-A identifier, price and expiry date.
//!
//! ## Lifecycle
//! ```text
//! Item::new(name, upc, price, expiry)
//!      │
//!      ├── name empty?           → ValidationError::Required
//!      ├── upc malformed?        → ValidationError::InvalidUpc
//!      ├── price <= 0?           → ValidationError::MustBePositive
//!      ├── expiry before today?  → ValidationError::DateInPast
//!      │
//!      ▼
//! Item ──duplicate()──► fresh Item owned by a Slot or Bundle
//! ```

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::error::VendingResult;
use crate::money::Money;
use crate::upc::validate_upc;
use crate::validation::{validate_not_before, validate_price, validate_required};

/// A single product with a checksum-validated UPC.
///
/// The expiry is a calendar date; time of day is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    upc: String,
    price: Money,
    expiry: NaiveDate,
}

impl Item {
    /// Creates an item, checking the expiry against today's UTC date.
    pub fn new(
        name: impl Into<String>,
        upc: impl Into<String>,
        price: Money,
        expiry: NaiveDate,
    ) -> VendingResult<Self> {
        Self::new_as_of(name, upc, price, expiry, Utc::now().date_naive())
    }

    /// Creates an item, checking the expiry against the given reference day.
    ///
    /// ## Errors
    /// - `Required` if `name` or `upc` is empty
    /// - `InvalidUpc` if `upc` is not a valid 12-digit UPC-A code
    /// - `MustBePositive` if `price` is zero or negative
    /// - `DateInPast` if `expiry` is before `today`
    pub fn new_as_of(
        name: impl Into<String>,
        upc: impl Into<String>,
        price: Money,
        expiry: NaiveDate,
        today: NaiveDate,
    ) -> VendingResult<Self> {
        let name = name.into();
        let upc = upc.into();

        validate_required("name", &name)?;
        validate_required("upc", &upc)?;
        validate_not_before("expiry date", expiry, today)?;
        validate_upc(&upc)?;
        validate_price(price)?;

        Ok(Item {
            name,
            upc,
            price,
            expiry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The 12-digit UPC-A code.
    pub fn upc(&self) -> &str {
        &self.upc
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// Replaces the price.
    ///
    /// ## Errors
    /// - `MustBePositive` if `price` is zero or negative; the old price is kept
    pub fn set_price(&mut self, price: Money) -> VendingResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Whether the item is past its expiry on `date`.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiry < date
    }

    /// Returns an independent copy of this item.
    pub fn duplicate(&self) -> Item {
        self.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
