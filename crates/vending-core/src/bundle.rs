//! # Bundles
//!
//! A bundle sells two or more distinct items together under its own
//! identifier, at 20% of the sum of its members' prices.
//!
//! ## Price
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  members:  Soda $1.00  +  Chips $2.00   = $3.00                         │
//! │  price():  $3.00 × 20%                  = $0.60                         │
//! │                                                                         │
//! │  Recomputed on every call, so a member price change is visible at once. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Member Count
//! At least [`MIN_BUNDLE_ITEMS`] items are required to build a bundle.
//! [`Bundle::remove`] does not re-check that floor, so an existing bundle may
//! shrink to one or zero members.

use serde::Serialize;

use crate::error::{VendingError, VendingResult};
use crate::item::Item;
use crate::money::Money;
use crate::validation::validate_required;

/// Minimum number of items needed to build a bundle.
pub const MIN_BUNDLE_ITEMS: usize = 2;

/// Share of the member sum charged for a bundle, in basis points (20%).
pub const BUNDLE_PRICE_BPS: u32 = 2000;

/// A pack of distinct items sold as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    name: String,
    identifier: String,
    members: Vec<Item>,
}

impl Bundle {
    /// Builds a bundle from at least two items with pairwise distinct UPCs.
    ///
    /// Member order is preserved.
    ///
    /// ## Errors
    /// - `Required` if `name` or `identifier` is empty
    /// - `BundleTooSmall` with fewer than two items
    /// - `DuplicateMember` if any two items share a UPC
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> VendingResult<Self> {
        let name = name.into();
        let identifier = identifier.into();
        validate_required("name", &name)?;
        validate_required("identifier", &identifier)?;

        let members: Vec<Item> = items.into_iter().collect();
        if members.len() < MIN_BUNDLE_ITEMS {
            return Err(VendingError::BundleTooSmall {
                min: MIN_BUNDLE_ITEMS,
                found: members.len(),
            });
        }

        for (i, item) in members.iter().enumerate() {
            if members[i + 1..].iter().any(|other| other.upc() == item.upc()) {
                return Err(VendingError::DuplicateMember(item.upc().to_string()));
            }
        }

        Ok(Bundle {
            name,
            identifier,
            members,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn members(&self) -> &[Item] {
        &self.members
    }

    /// Number of member items (the pack size).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 20% of the sum of member prices, rounded half-up to a cent.
    pub fn price(&self) -> Money {
        let sum: Money = self.members.iter().map(Item::price).sum();
        sum.percentage(BUNDLE_PRICE_BPS)
    }

    /// Appends an item.
    ///
    /// ## Errors
    /// - `DuplicateMember` if an item with the same UPC is already a member
    pub fn add(&mut self, item: Item) -> VendingResult<()> {
        if self.members.iter().any(|m| m.upc() == item.upc()) {
            return Err(VendingError::DuplicateMember(item.upc().to_string()));
        }
        self.members.push(item);
        Ok(())
    }

    /// Removes the member with the given UPC and returns it.
    ///
    /// ## Errors
    /// - `Required` if `upc` is empty
    /// - `EmptyBundle` if there are no members
    /// - `MemberNotFound` if no member has that UPC
    pub fn remove(&mut self, upc: &str) -> VendingResult<Item> {
        self.check_lookup(upc)?;
        let index = self
            .members
            .iter()
            .position(|m| m.upc() == upc)
            .ok_or_else(|| VendingError::MemberNotFound {
                bundle: self.identifier.clone(),
                upc: upc.to_string(),
            })?;
        Ok(self.members.remove(index))
    }

    /// Whether a member carries the given UPC.
    ///
    /// ## Errors
    /// - `Required` if `upc` is empty
    /// - `EmptyBundle` if there are no members
    pub fn contains(&self, upc: &str) -> VendingResult<bool> {
        self.check_lookup(upc)?;
        Ok(self.members.iter().any(|m| m.upc() == upc))
    }

    /// Sets the price of the member with the given UPC.
    ///
    /// The price itself is validated by [`Item::set_price`]. An unknown UPC
    /// is not an error: nothing changes.
    ///
    /// ## Errors
    /// - `Required` if `upc` is empty
    /// - `EmptyBundle` if there are no members
    /// - `MustBePositive` (from the member) if `price` is zero or negative
    pub fn change_member_price(&mut self, upc: &str, price: Money) -> VendingResult<()> {
        self.check_lookup(upc)?;
        for member in self.members.iter_mut().filter(|m| m.upc() == upc) {
            member.set_price(price)?;
        }
        Ok(())
    }

    /// Human-readable list of member names.
    ///
    /// ## Example
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use vending_core::{Bundle, Item, Money};
    /// # let expiry = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
    /// let soda = Item::new("Soda", "036000291452", Money::from_cents(100), expiry).unwrap();
    /// let chips = Item::new("Chips", "012345678905", Money::from_cents(200), expiry).unwrap();
    /// let bundle = Bundle::new("Lunch", "LUNCH-1", [soda, chips]).unwrap();
    ///
    /// assert_eq!(bundle.describe_members(), "Bundle contains: Soda, Chips.");
    /// ```
    pub fn describe_members(&self) -> String {
        if self.members.is_empty() {
            return "Bundle contains no items.".to_string();
        }
        let names: Vec<&str> = self.members.iter().map(Item::name).collect();
        format!("Bundle contains: {}.", names.join(", "))
    }

    /// Returns an independent deep copy of this bundle and its members.
    pub fn duplicate(&self) -> Bundle {
        self.clone()
    }

    fn check_lookup(&self, upc: &str) -> VendingResult<()> {
        validate_required("upc", upc)?;
        if self.members.is_empty() {
            return Err(VendingError::EmptyBundle(self.identifier.clone()));
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::validation::MAX_PRICE_CENTS;
    use chrono::NaiveDate;

    fn item(name: &str, upc: &str, cents: i64) -> Item {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2027, 10, 19).unwrap();
        Item::new_as_of(name, upc, Money::from_cents(cents), expiry, today).unwrap()
    }

    fn soda() -> Item {
        item("Soda", "036000291452", 100)
    }

    fn chips() -> Item {
        item("Chips", "012345678905", 200)
    }

    fn candy() -> Item {
        item("Candy", "042100005264", 50)
    }

    fn lunch() -> Bundle {
        Bundle::new("Lunch", "LUNCH-1", [soda(), chips()]).unwrap()
    }

    #[test]
    fn test_new_bundle_keeps_order() {
        let bundle = Bundle::new("Snack pack", "PACK-1", vec![chips(), soda(), candy()]).unwrap();
        let names: Vec<&str> = bundle.members().iter().map(Item::name).collect();
        assert_eq!(names, ["Chips", "Soda", "Candy"]);
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.identifier(), "PACK-1");
    }

    #[test]
    fn test_requires_two_items() {
        let err = Bundle::new("Lunch", "LUNCH-1", [soda()]).unwrap_err();
        assert!(matches!(
            err,
            VendingError::BundleTooSmall { min: 2, found: 1 }
        ));
        assert!(Bundle::new("Lunch", "LUNCH-1", Vec::<Item>::new()).is_err());
    }

    #[test]
    fn test_requires_name_and_identifier() {
        assert!(matches!(
            Bundle::new("", "LUNCH-1", [soda(), chips()]),
            Err(VendingError::Validation(ValidationError::Required { .. }))
        ));
        assert!(Bundle::new("Lunch", "", [soda(), chips()]).is_err());
    }

    #[test]
    fn test_rejects_duplicates_in_any_position() {
        let orders = [
            vec![soda(), soda(), chips()],
            vec![soda(), chips(), soda()],
            vec![chips(), soda(), candy(), soda()],
        ];
        for items in orders {
            let err = Bundle::new("Pack", "PACK-1", items).unwrap_err();
            assert!(matches!(err, VendingError::DuplicateMember(ref upc) if upc == "036000291452"));
            assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        }
    }

    #[test]
    fn test_price_is_twenty_percent_of_sum() {
        assert_eq!(lunch().price(), Money::from_cents(60));
    }

    #[test]
    fn test_price_follows_member_price_changes() {
        let mut bundle = lunch();
        bundle
            .change_member_price("012345678905", Money::from_cents(400))
            .unwrap();
        assert_eq!(bundle.price(), Money::from_cents(100));
    }

    #[test]
    fn test_change_member_price_unknown_upc_is_noop() {
        let mut bundle = lunch();
        bundle
            .change_member_price("042100005264", Money::from_cents(400))
            .unwrap();
        assert_eq!(bundle, lunch());
    }

    #[test]
    fn test_change_member_price_rejects_non_positive_via_item() {
        let mut bundle = lunch();
        let err = bundle
            .change_member_price("036000291452", Money::zero())
            .unwrap_err();
        assert!(matches!(
            err,
            VendingError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert_eq!(bundle.price(), Money::from_cents(60));
    }

    #[test]
    fn test_member_price_ceiling_keeps_sum_bounded() {
        let mut bundle = lunch();
        let err = bundle
            .change_member_price("036000291452", Money::from_cents(i64::MAX))
            .unwrap_err();
        assert!(matches!(
            err,
            VendingError::Validation(ValidationError::OutOfRange { .. })
        ));

        bundle
            .change_member_price("036000291452", Money::from_cents(MAX_PRICE_CENTS))
            .unwrap();
        bundle
            .change_member_price("012345678905", Money::from_cents(MAX_PRICE_CENTS))
            .unwrap();
        assert_eq!(bundle.price(), Money::from_cents(MAX_PRICE_CENTS * 2 / 5));
    }

    #[test]
    fn test_add() {
        let mut bundle = lunch();
        bundle.add(candy()).unwrap();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.price(), Money::from_cents(70));

        let err = bundle.add(soda()).unwrap_err();
        assert!(matches!(err, VendingError::DuplicateMember(_)));
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn test_remove_can_shrink_below_minimum() {
        let mut bundle = lunch();
        let removed = bundle.remove("012345678905").unwrap();
        assert_eq!(removed.name(), "Chips");
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.price(), Money::from_cents(20));

        bundle.remove("036000291452").unwrap();
        assert!(bundle.is_empty());
        assert!(bundle.price().is_zero());
    }

    #[test]
    fn test_remove_errors() {
        let mut bundle = lunch();
        assert!(matches!(
            bundle.remove(""),
            Err(VendingError::Validation(ValidationError::Required { .. }))
        ));
        assert!(matches!(
            bundle.remove("042100005264"),
            Err(VendingError::MemberNotFound { .. })
        ));

        bundle.remove("036000291452").unwrap();
        bundle.remove("012345678905").unwrap();
        assert!(matches!(
            bundle.remove("036000291452"),
            Err(VendingError::EmptyBundle(_))
        ));
    }

    #[test]
    fn test_contains() {
        let mut bundle = lunch();
        assert!(bundle.contains("036000291452").unwrap());
        assert!(!bundle.contains("042100005264").unwrap());
        assert!(bundle.contains("").is_err());

        bundle.remove("036000291452").unwrap();
        bundle.remove("012345678905").unwrap();
        assert!(matches!(
            bundle.contains("036000291452"),
            Err(VendingError::EmptyBundle(_))
        ));
        assert!(bundle
            .change_member_price("036000291452", Money::from_cents(1))
            .is_err());
    }

    #[test]
    fn test_describe_members() {
        let mut bundle = lunch();
        assert_eq!(bundle.describe_members(), "Bundle contains: Soda, Chips.");

        bundle.remove("036000291452").unwrap();
        bundle.remove("012345678905").unwrap();
        assert_eq!(bundle.describe_members(), "Bundle contains no items.");
    }

    #[test]
    fn test_duplicate_is_deep() {
        let original = lunch();
        let mut copy = original.duplicate();
        copy.change_member_price("036000291452", Money::from_cents(500))
            .unwrap();
        assert_eq!(original.price(), Money::from_cents(60));
        assert_eq!(copy.price(), Money::from_cents(140));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: price is 20% of the member sum, before and after a member price change.
            #[test]
            fn price_tracks_member_sum(
                a in 1i64..100_000,
                b in 1i64..100_000,
                c in 1i64..100_000,
                new_price in 1i64..100_000,
            ) {
                let mut bundle = Bundle::new(
                    "Pack",
                    "PACK-1",
                    [
                        item("Soda", "036000291452", a),
                        item("Chips", "012345678905", b),
                        item("Candy", "042100005264", c),
                    ],
                ).unwrap();
                prop_assert_eq!(
                    bundle.price(),
                    Money::from_cents(a + b + c).percentage(BUNDLE_PRICE_BPS)
                );

                bundle.change_member_price("012345678905", Money::from_cents(new_price)).unwrap();
                prop_assert_eq!(
                    bundle.price(),
                    Money::from_cents(a + new_price + c).percentage(BUNDLE_PRICE_BPS)
                );
            }
        }
    }
}
