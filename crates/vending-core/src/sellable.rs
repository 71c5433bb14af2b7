//! # Sellables
//!
//! Anything a slot can hold: a single [`Item`] or a [`Bundle`] of items.
//!
//! ## Variant Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sellable                                                               │
//! │  ├── Item(Item)      identifier = UPC, price = stored price            │
//! │  └── Bundle(Bundle)  identifier = bundle id, price = 20% of members    │
//! │                                                                         │
//! │  name / identifier / price / duplicate     → same meaning, any variant  │
//! │  contains_upc / change_price_for_upc       → meaning differs, so each   │
//! │                                              variant is matched out     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::bundle::Bundle;
use crate::error::VendingResult;
use crate::item::Item;
use crate::money::Money;

/// Discriminator for the two [`Sellable`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SellableKind {
    Item,
    Bundle,
}

/// Something priced and identified that can occupy a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sellable {
    Item(Item),
    Bundle(Bundle),
}

impl Sellable {
    pub fn kind(&self) -> SellableKind {
        match self {
            Sellable::Item(_) => SellableKind::Item,
            Sellable::Bundle(_) => SellableKind::Bundle,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Sellable::Item(item) => item.name(),
            Sellable::Bundle(bundle) => bundle.name(),
        }
    }

    /// The UPC of an item, or the bundle's own identifier.
    pub fn identifier(&self) -> &str {
        match self {
            Sellable::Item(item) => item.upc(),
            Sellable::Bundle(bundle) => bundle.identifier(),
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Sellable::Item(item) => item.price(),
            Sellable::Bundle(bundle) => bundle.price(),
        }
    }

    /// Returns an independent copy, sharing no state with `self`.
    pub fn duplicate(&self) -> Sellable {
        match self {
            Sellable::Item(item) => Sellable::Item(item.duplicate()),
            Sellable::Bundle(bundle) => Sellable::Bundle(bundle.duplicate()),
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Sellable::Item(item) => Some(item),
            Sellable::Bundle(_) => None,
        }
    }

    pub fn as_bundle(&self) -> Option<&Bundle> {
        match self {
            Sellable::Bundle(bundle) => Some(bundle),
            Sellable::Item(_) => None,
        }
    }

    /// Whether this unit is, or contains, the item with the given UPC.
    ///
    /// An item compares its own UPC; a bundle looks at its members and
    /// fails with `EmptyBundle` when it has none.
    pub(crate) fn contains_upc(&self, upc: &str) -> VendingResult<bool> {
        match self {
            Sellable::Item(item) => Ok(item.upc() == upc),
            Sellable::Bundle(bundle) => bundle.contains(upc),
        }
    }

    /// Reprices the item with the given UPC, wherever it sits in this unit.
    ///
    /// An item whose UPC differs is left untouched, as is a bundle without a
    /// matching member.
    pub(crate) fn change_price_for_upc(&mut self, upc: &str, price: Money) -> VendingResult<()> {
        match self {
            Sellable::Item(item) if item.upc() == upc => item.set_price(price),
            Sellable::Item(_) => Ok(()),
            Sellable::Bundle(bundle) => bundle.change_member_price(upc, price),
        }
    }
}

impl From<Item> for Sellable {
    fn from(item: Item) -> Self {
        Sellable::Item(item)
    }
}

impl From<Bundle> for Sellable {
    fn from(bundle: Bundle) -> Self {
        Sellable::Bundle(bundle)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(name: &str, upc: &str, cents: i64) -> Item {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2027, 10, 19).unwrap();
        Item::new_as_of(name, upc, Money::from_cents(cents), expiry, today).unwrap()
    }

    fn soda() -> Sellable {
        item("Soda", "036000291452", 100).into()
    }

    fn lunch() -> Sellable {
        Bundle::new(
            "Lunch",
            "LUNCH-1",
            [item("Soda", "036000291452", 100), item("Chips", "012345678905", 200)],
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_common_accessors() {
        let soda = soda();
        assert_eq!(soda.kind(), SellableKind::Item);
        assert_eq!(soda.name(), "Soda");
        assert_eq!(soda.identifier(), "036000291452");
        assert_eq!(soda.price(), Money::from_cents(100));
        assert!(soda.as_item().is_some());
        assert!(soda.as_bundle().is_none());

        let lunch = lunch();
        assert_eq!(lunch.kind(), SellableKind::Bundle);
        assert_eq!(lunch.name(), "Lunch");
        assert_eq!(lunch.identifier(), "LUNCH-1");
        assert_eq!(lunch.price(), Money::from_cents(60));
        assert_eq!(lunch.as_bundle().map(Bundle::len), Some(2));
    }

    #[test]
    fn test_contains_upc_by_variant() {
        assert!(soda().contains_upc("036000291452").unwrap());
        assert!(!soda().contains_upc("012345678905").unwrap());

        assert!(lunch().contains_upc("012345678905").unwrap());
        assert!(!lunch().contains_upc("LUNCH-1").unwrap());
    }

    #[test]
    fn test_change_price_for_upc_by_variant() {
        let mut unit = soda();
        unit.change_price_for_upc("012345678905", Money::from_cents(999))
            .unwrap();
        assert_eq!(unit.price(), Money::from_cents(100));
        unit.change_price_for_upc("036000291452", Money::from_cents(120))
            .unwrap();
        assert_eq!(unit.price(), Money::from_cents(120));

        let mut unit = lunch();
        unit.change_price_for_upc("036000291452", Money::from_cents(300))
            .unwrap();
        assert_eq!(unit.price(), Money::from_cents(100));
    }

    #[test]
    fn test_duplicate_does_not_alias() {
        let original = lunch();
        let mut copy = original.duplicate();
        copy.change_price_for_upc("036000291452", Money::from_cents(500))
            .unwrap();
        assert_eq!(original.price(), Money::from_cents(60));
        assert_ne!(copy, original);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(soda()).unwrap();
        assert_eq!(json["kind"], "item");
        assert_eq!(json["upc"], "036000291452");
    }
}
