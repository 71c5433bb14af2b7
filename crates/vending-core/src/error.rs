//! # Error Types
//!
//! Domain-specific error types for vending-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vending-core errors (this file)                                       │
//! │  ├── VendingError     - Domain rule violations (slot, bundle, machine) │
//! │  ├── ValidationError  - Input shape failures (empty, <= 0, bad UPC)    │
//! │  └── PaymentError     - Raised by an external payment handle           │
//! │                                                                         │
//! │  vending-runtime errors (separate crate)                               │
//! │  └── RuntimeError     - Config / IO failures around the core           │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        PaymentError ────┴─► VendingError ─► RuntimeError               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (slot id, UPC, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every failure is raised before any state is mutated

use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification of a failure.
///
/// Callers that only need to know *what sort* of rejection happened (for
/// example to pick a status code or a display colour) match on this instead
/// of on every individual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty string, out-of-range number, empty collection.
    InvalidArgument,
    /// The operation would break an identity or non-emptiness invariant.
    InvariantViolation,
    /// The slot, member or unit addressed does not exist.
    NotFound,
    /// Not enough balance to cover the price.
    InsufficientResource,
    /// The payment handle refused the operation.
    External,
}

// =============================================================================
// Vending Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. All of them are raised
/// synchronously and leave the entity in its prior valid state.
#[derive(Debug, Error)]
pub enum VendingError {
    /// The requested slot is not part of the machine's grid.
    #[error("Slot not found: {0}")]
    SlotNotFound(String),

    /// The slot holds no units.
    ///
    /// ## When This Occurs
    /// - Purchasing from a slot that was sold out
    /// - Asking an empty slot for its price or identifier
    #[error("Slot {0} is empty")]
    EmptySlot(String),

    /// A unit was offered to a slot already stocked with a different identity.
    ///
    /// ## User Workflow
    /// ```text
    /// Slot A0 holds: 036000291452 (Soda) x3
    ///      │
    ///      ▼
    /// restock("A0", Chips 012345678905)
    ///      │
    ///      ▼
    /// IdentifierMismatch { slot: "A0", resident: "0360...", offered: "0123..." }
    /// ```
    #[error("Slot {slot} holds {resident}, cannot stock {offered}")]
    IdentifierMismatch {
        slot: String,
        resident: String,
        offered: String,
    },

    /// A batch restock mixed units of different identities.
    #[error("Restock batch must contain a single identifier: found {first} and {other}")]
    MixedBatch { first: String, other: String },

    /// A batch restock carried no units.
    #[error("Restock batch cannot be empty")]
    EmptyBatch,

    /// A bundle was built from fewer members than the minimum.
    #[error("A bundle needs at least {min} items, got {found}")]
    BundleTooSmall { min: usize, found: usize },

    /// Two bundle members share an identifier.
    #[error("Bundle already contains an item with UPC {0}")]
    DuplicateMember(String),

    /// The bundle has no members left to query or remove.
    #[error("Bundle {0} has no items")]
    EmptyBundle(String),

    /// No bundle member carries the given identifier.
    #[error("Bundle {bundle} does not contain UPC {upc}")]
    MemberNotFound { bundle: String, upc: String },

    /// The payment handle balance does not cover the price.
    #[error("Insufficient funds: price {price}, balance {balance}")]
    InsufficientFunds { price: Money, balance: Money },

    /// The payment handle rejected a balance read or a debit.
    #[error("Payment failed: {0}")]
    Payment(#[from] PaymentError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl VendingError {
    /// Classifies the error into the coarse [`ErrorKind`] taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VendingError::EmptyBatch | VendingError::BundleTooSmall { .. } => {
                ErrorKind::InvalidArgument
            }
            VendingError::IdentifierMismatch { .. }
            | VendingError::MixedBatch { .. }
            | VendingError::DuplicateMember(_) => ErrorKind::InvariantViolation,
            VendingError::SlotNotFound(_)
            | VendingError::EmptySlot(_)
            | VendingError::EmptyBundle(_)
            | VendingError::MemberNotFound { .. } => ErrorKind::NotFound,
            VendingError::InsufficientFunds { .. } => ErrorKind::InsufficientResource,
            VendingError::Payment(_) => ErrorKind::External,
            VendingError::Validation(err) => err.kind(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at construction and operation boundaries before any business
/// logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// The UPC is not 12 digits or fails the check digit.
    ///
    /// Length, character and check-digit failures all collapse into this
    /// single variant; `reason` tells them apart for humans.
    #[error("Invalid UPC '{upc}': {reason}")]
    InvalidUpc { upc: String, reason: String },

    /// A date lies before the reference day.
    #[error("{field} {date} is before {today}")]
    DateInPast {
        field: String,
        date: NaiveDate,
        today: NaiveDate,
    },
}

impl ValidationError {
    /// Classifies the error into the coarse [`ErrorKind`] taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Required { .. } | ValidationError::OutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
            ValidationError::MustBePositive { .. }
            | ValidationError::InvalidUpc { .. }
            | ValidationError::DateInPast { .. } => ErrorKind::InvariantViolation,
        }
    }
}

// =============================================================================
// Payment Error
// =============================================================================

/// Errors surfaced by a [`PaymentHandle`](crate::payment::PaymentHandle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The credential presented does not unlock the instrument.
    #[error("Invalid credential")]
    InvalidCredential,

    /// The instrument refused the debit.
    #[error("Debit declined: {reason}")]
    Declined { reason: String },

    /// The instrument could not be reached or read.
    #[error("Payment instrument unavailable: {reason}")]
    Unavailable { reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with VendingError.
pub type VendingResult<T> = Result<T, VendingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VendingError::IdentifierMismatch {
            slot: "A0".to_string(),
            resident: "036000291452".to_string(),
            offered: "012345678905".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Slot A0 holds 036000291452, cannot stock 012345678905"
        );

        let err = VendingError::InsufficientFunds {
            price: Money::from_cents(150),
            balance: Money::from_cents(100),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: price $1.50, balance $1.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "slot id".to_string(),
        };
        assert_eq!(err.to_string(), "slot id is required");

        let err = ValidationError::InvalidUpc {
            upc: "12345".to_string(),
            reason: "must be exactly 12 digits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid UPC '12345': must be exactly 12 digits"
        );
    }

    #[test]
    fn test_conversions_into_vending_error() {
        let err: VendingError = ValidationError::Required {
            field: "upc".to_string(),
        }
        .into();
        assert!(matches!(err, VendingError::Validation(_)));

        let err: VendingError = PaymentError::InvalidCredential.into();
        assert!(matches!(err, VendingError::Payment(_)));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            VendingError::SlotNotFound("Z9".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            VendingError::DuplicateMember("036000291452".into()).kind(),
            ErrorKind::InvariantViolation
        );
        assert_eq!(
            VendingError::InsufficientFunds {
                price: Money::from_cents(1),
                balance: Money::zero(),
            }
            .kind(),
            ErrorKind::InsufficientResource
        );
        assert_eq!(
            VendingError::from(ValidationError::Required {
                field: "name".into()
            })
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            VendingError::from(PaymentError::InvalidCredential).kind(),
            ErrorKind::External
        );
    }
}
