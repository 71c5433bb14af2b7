//! # Validation Module
//!
//! Input validation helpers shared by items, bundles, slots and machines.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Argument shape (THIS MODULE)                                 │
//! │  ├── Non-empty names and identifiers                                   │
//! │  ├── Strictly positive prices                                          │
//! │  └── Dates not in the past, grid sizes in range                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entity invariants (item, bundle, slot, machine modules)      │
//! │  ├── UPC check digit                                                   │
//! │  ├── Distinct bundle members                                           │
//! │  └── One identity per slot                                             │
//! │                                                                         │
//! │  Every check runs before any mutation.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vending_core::money::Money;
//! use vending_core::validation::{validate_price, validate_required};
//!
//! validate_required("slot id", "A0").unwrap();
//! assert!(validate_price(Money::zero()).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Number of letters available to label machine columns.
pub const MAX_COLUMNS: usize = 26;

/// Highest accepted unit price, in cents ($1,000,000.00).
///
/// Keeps bundle totals far away from `i64` overflow.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is not empty.
///
/// ## Example
/// ```rust
/// use vending_core::validation::validate_required;
///
/// assert!(validate_required("name", "Soda").is_ok());
/// assert!(validate_required("name", "").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be strictly positive; free items are not sellable
/// - Must not exceed [`MAX_PRICE_CENTS`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates the column count of a machine grid.
///
/// ## Rules
/// - Between 1 and 26; each column is labelled by one letter A..Z
pub fn validate_columns(columns: usize) -> ValidationResult<()> {
    if columns == 0 || columns > MAX_COLUMNS {
        return Err(ValidationError::OutOfRange {
            field: "columns".to_string(),
            min: 1,
            max: MAX_COLUMNS as i64,
        });
    }

    Ok(())
}

/// Validates the row count of a machine grid.
pub fn validate_rows(rows: usize) -> ValidationResult<()> {
    if rows == 0 {
        return Err(ValidationError::MustBePositive {
            field: "rows".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates that `date` is not before `today`.
///
/// The same day is accepted; only strictly earlier dates are rejected.
pub fn validate_not_before(field: &str, date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::DateInPast {
            field: field.to_string(),
            date,
            today,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
