//! # Payment Handles
//!
//! The machine never owns money. It talks to a payment instrument through
//! the narrow [`PaymentHandle`] trait: read the balance, debit an amount.
//!
//! ## Purchase Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Machine::purchase(slot, handle, credential)                            │
//! │                                                                         │
//! │  1. price = slot.price()           ─── EmptySlot ──────────► abort     │
//! │  2. balance = handle.current_balance() ── PaymentError ────► abort     │
//! │  3. balance < price?               ─── InsufficientFunds ──► abort     │
//! │  4. handle.debit(credential, price) ── PaymentError ───────► abort     │
//! │  5. slot.remove_unit()             (only after the debit cleared)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::PaymentError;
use crate::money::Money;

/// External payment instrument used during a purchase.
pub trait PaymentHandle {
    /// Reads the balance currently available.
    fn current_balance(&self) -> Result<Money, PaymentError>;

    /// Debits `amount`, authorised by `credential`.
    ///
    /// Implementations must leave the balance untouched on error.
    fn debit(&mut self, credential: &str, amount: Money) -> Result<(), PaymentError>;
}

impl<T: PaymentHandle + ?Sized> PaymentHandle for &mut T {
    fn current_balance(&self) -> Result<Money, PaymentError> {
        (**self).current_balance()
    }

    fn debit(&mut self, credential: &str, amount: Money) -> Result<(), PaymentError> {
        (**self).debit(credential, amount)
    }
}

// =============================================================================
// Prepaid Card
// =============================================================================

/// In-memory stored-value card protected by a credential.
///
/// ## Example
/// ```rust
/// use vending_core::money::Money;
/// use vending_core::payment::{PaymentHandle, PrepaidCard};
///
/// let mut card = PrepaidCard::new("secret", Money::from_cents(200));
/// card.debit("secret", Money::from_cents(150)).unwrap();
/// assert_eq!(card.balance(), Money::from_cents(50));
///
/// assert!(card.debit("wrong", Money::from_cents(10)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PrepaidCard {
    credential: String,
    balance: Money,
}

impl PrepaidCard {
    pub fn new(credential: impl Into<String>, balance: Money) -> Self {
        PrepaidCard {
            credential: credential.into(),
            balance,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds funds to the card.
    ///
    /// ## Errors
    /// - `InvalidCredential` if `credential` does not match
    /// - `Declined` if `amount` is not positive
    pub fn recharge(&mut self, credential: &str, amount: Money) -> Result<(), PaymentError> {
        self.authorise(credential)?;
        if !amount.is_positive() {
            return Err(PaymentError::Declined {
                reason: format!("recharge amount {amount} must be positive"),
            });
        }
        self.balance += amount;
        Ok(())
    }

    fn authorise(&self, credential: &str) -> Result<(), PaymentError> {
        if credential != self.credential {
            return Err(PaymentError::InvalidCredential);
        }
        Ok(())
    }
}

impl PaymentHandle for PrepaidCard {
    fn current_balance(&self) -> Result<Money, PaymentError> {
        Ok(self.balance)
    }

    fn debit(&mut self, credential: &str, amount: Money) -> Result<(), PaymentError> {
        self.authorise(credential)?;
        if !amount.is_positive() {
            return Err(PaymentError::Declined {
                reason: format!("debit amount {amount} must be positive"),
            });
        }
        if amount > self.balance {
            return Err(PaymentError::Declined {
                reason: format!("balance {} does not cover {amount}", self.balance),
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit() {
        let mut card = PrepaidCard::new("1234", Money::from_cents(200));
        card.debit("1234", Money::from_cents(150)).unwrap();
        assert_eq!(card.current_balance().unwrap(), Money::from_cents(50));
    }

    #[test]
    fn test_debit_wrong_credential_keeps_balance() {
        let mut card = PrepaidCard::new("1234", Money::from_cents(200));
        assert_eq!(
            card.debit("0000", Money::from_cents(150)),
            Err(PaymentError::InvalidCredential)
        );
        assert_eq!(card.balance(), Money::from_cents(200));
    }

    #[test]
    fn test_debit_over_balance_is_declined() {
        let mut card = PrepaidCard::new("1234", Money::from_cents(100));
        assert!(matches!(
            card.debit("1234", Money::from_cents(101)),
            Err(PaymentError::Declined { .. })
        ));
        assert!(card.debit("1234", Money::zero()).is_err());
        assert_eq!(card.balance(), Money::from_cents(100));
    }

    #[test]
    fn test_recharge() {
        let mut card = PrepaidCard::new("1234", Money::zero());
        card.recharge("1234", Money::from_cents(500)).unwrap();
        assert_eq!(card.balance(), Money::from_cents(500));
        assert!(card.recharge("0000", Money::from_cents(500)).is_err());
        assert!(card.recharge("1234", Money::from_cents(-1)).is_err());
        assert_eq!(card.balance(), Money::from_cents(500));
    }

    #[test]
    fn test_handle_through_mutable_reference() {
        fn spend(mut handle: impl PaymentHandle) -> Result<(), PaymentError> {
            handle.debit("1234", Money::from_cents(25))
        }

        let mut card = PrepaidCard::new("1234", Money::from_cents(100));
        spend(&mut card).unwrap();
        assert_eq!(card.balance(), Money::from_cents(75));
    }
}
