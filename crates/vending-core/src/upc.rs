//! # UPC-A Identifiers
//!
//! Every [`Item`](crate::item::Item) is identified by a 12-digit UPC-A code
//! whose last digit is a checksum over the first eleven.
//!
//! ## Check Digit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  0  3  6  0  0  0  2  9  1  4  5  │ 2                                  │
//! │  ×3 ×1 ×3 ×1 ×3 ×1 ×3 ×1 ×3 ×1 ×3 │                                    │
//! │  ───────────────────────────────  │                                    │
//! │  sum = 58                         │                                    │
//! │  distance to next multiple of 10 = 60 - 58 = 2  ───────► check digit 2 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vending_core::upc::{check_digit, is_valid_upc};
//!
//! assert!(is_valid_upc("036000291452"));
//! assert!(!is_valid_upc("036000291453"));
//! assert_eq!(check_digit("03600029145"), Some(2));
//! ```

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Number of characters in a UPC-A code.
pub const UPC_LENGTH: usize = 12;

/// Computes the UPC-A check digit for the first eleven digits of `payload`.
///
/// Positions are 0-indexed; even positions weigh 3, odd positions weigh 1.
/// Returns `None` when `payload` holds fewer than eleven characters or any of
/// the first eleven is not an ASCII digit.
pub fn check_digit(payload: &str) -> Option<u8> {
    let bytes = payload.as_bytes();
    if bytes.len() < UPC_LENGTH - 1 {
        return None;
    }

    let mut sum: u32 = 0;
    for (position, byte) in bytes[..UPC_LENGTH - 1].iter().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let weight = if position % 2 == 0 { 3 } else { 1 };
        sum += u32::from(byte - b'0') * weight;
    }

    Some(((10 - sum % 10) % 10) as u8)
}

/// Validates a UPC-A code.
///
/// ## Rules
/// - Exactly 12 characters
/// - ASCII digits only
/// - Last digit equals [`check_digit`] of the first eleven
///
/// All three failures are reported as [`ValidationError::InvalidUpc`].
pub fn validate_upc(upc: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidUpc {
        upc: upc.to_string(),
        reason: reason.to_string(),
    };

    if upc.len() != UPC_LENGTH {
        return Err(invalid("must be exactly 12 digits"));
    }

    if !upc.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("must contain only digits"));
    }

    let expected = check_digit(upc).ok_or_else(|| invalid("must contain only digits"))?;
    let actual = upc.as_bytes()[UPC_LENGTH - 1] - b'0';
    if expected != actual {
        return Err(invalid("check digit mismatch"));
    }

    Ok(())
}

/// Returns `true` when `upc` passes [`validate_upc`].
pub fn is_valid_upc(upc: &str) -> bool {
    validate_upc(upc).is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_CODES: &[&str] = &[
        "036000291452",
        "012345678905",
        "042100005264",
        "614141000036",
        "725272730706",
        "885909950805",
    ];

    #[test]
    fn test_known_codes_validate() {
        for code in KNOWN_CODES {
            assert!(is_valid_upc(code), "{code} should be valid");
        }
    }

    #[test]
    fn test_every_wrong_check_digit_is_rejected() {
        let base = "03600029145";
        for digit in 0..=9u8 {
            let code = format!("{base}{digit}");
            assert_eq!(is_valid_upc(&code), digit == 2, "{code}");
        }
    }

    #[test]
    fn test_check_digit_weights() {
        // a lone 1 at an odd position weighs 1, at an even position 3
        assert_eq!(check_digit("00000000000"), Some(0));
        assert_eq!(check_digit("00000000010"), Some(9));
        assert_eq!(check_digit("00000000001"), Some(7));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            validate_upc("03600029145"),
            Err(ValidationError::InvalidUpc { .. })
        ));
        assert!(validate_upc("0360002914520").is_err());
        assert!(validate_upc("").is_err());
    }

    #[test]
    fn test_rejects_non_digits() {
        let err = validate_upc("03600029145X").unwrap_err();
        assert!(err.to_string().contains("only digits"));
        assert!(validate_upc("-36000291452").is_err());
        assert!(validate_upc("03600 291452").is_err());
        // 12 bytes but not 12 ASCII digits
        assert!(validate_upc("٠٣٦٠٠٠").is_err());
    }

    #[test]
    fn test_check_digit_rejects_short_or_non_numeric_payload() {
        assert_eq!(check_digit("123"), None);
        assert_eq!(check_digit("0360002914a"), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a code validates iff its last digit is the computed check digit.
            #[test]
            fn valid_iff_last_digit_matches(payload in "[0-9]{11}", last in 0u8..=9) {
                let code = format!("{payload}{last}");
                let expected = check_digit(&payload).unwrap();
                prop_assert_eq!(is_valid_upc(&code), last == expected);
            }

            /// Property: appending the computed check digit always yields a valid code.
            #[test]
            fn appended_check_digit_validates(payload in "[0-9]{11}") {
                let digit = check_digit(&payload).unwrap();
                let code = format!("{payload}{digit}");
                prop_assert!(is_valid_upc(&code));
            }
        }
    }
}
