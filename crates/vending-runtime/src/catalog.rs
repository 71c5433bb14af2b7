//! # Sample Catalogue
//!
//! A small set of real-looking products used to stock a development machine.
//!
//! ## Layout
//! ```text
//! slot 0, 1, 2, ...  ──►  catalogue entry 0, 1, 2, ... (wrapping)
//! every BUNDLE_EVERY-th slot  ──►  a two-item bundle instead
//! ```

use chrono::{Days, NaiveDate};
use tracing::{debug, info};
use vending_core::{Bundle, Item, Machine, Money, Sellable};

use crate::error::RuntimeResult;

/// `(name, upc, price in cents)` for every sample product.
pub const PRODUCTS: &[(&str, &str, i64)] = &[
    ("Cola 330ml", "036000291452", 150),
    ("Salted Chips", "012345678905", 120),
    ("Chewing Gum", "042100005264", 90),
    ("Still Water", "614141000036", 100),
    ("Energy Drink", "725272730706", 250),
    ("Chocolate Bar", "885909950805", 130),
];

/// Every n-th slot is stocked with a bundle.
pub const BUNDLE_EVERY: usize = 5;

/// Shelf life given to sample items.
pub const SHELF_LIFE_DAYS: u64 = 180;

/// Builds catalogue entry `index` (wrapping) as an item expiring after the
/// shelf life.
pub fn sample_item(index: usize, today: NaiveDate) -> RuntimeResult<Item> {
    let (name, upc, cents) = PRODUCTS[index % PRODUCTS.len()];
    let expiry = today + Days::new(SHELF_LIFE_DAYS);
    Ok(Item::new_as_of(
        name,
        upc,
        Money::from_cents(cents),
        expiry,
        today,
    )?)
}

/// Builds a bundle of catalogue entries `index` and `index + 1`.
pub fn sample_bundle(index: usize, today: NaiveDate) -> RuntimeResult<Bundle> {
    let first = sample_item(index, today)?;
    let second = sample_item(index + 1, today)?;
    let name = format!("{} + {}", first.name(), second.name());
    let identifier = format!("PACK-{}-{}", first.upc(), second.upc());
    Ok(Bundle::new(name, identifier, [first, second])?)
}

/// Fills every empty slot with `units_per_slot` units and returns the number
/// of units added.
///
/// Slots that already hold stock are skipped.
pub fn stock_machine(
    machine: &mut Machine,
    units_per_slot: usize,
    today: NaiveDate,
) -> RuntimeResult<usize> {
    let empty: Vec<String> = machine
        .slots()
        .filter(|slot| slot.is_empty())
        .map(|slot| slot.id().to_string())
        .collect();

    let mut added = 0;
    for (index, slot_id) in empty.iter().enumerate() {
        let unit: Sellable = if (index + 1) % BUNDLE_EVERY == 0 {
            sample_bundle(index, today)?.into()
        } else {
            sample_item(index, today)?.into()
        };
        let batch = vec![unit; units_per_slot];
        if batch.is_empty() {
            continue;
        }
        machine.restock_many(slot_id, &batch)?;
        added += batch.len();
        debug!(slot = %slot_id, units = batch.len(), "Sample stock loaded");
    }

    info!(machine = %machine.id(), slots = empty.len(), units = added, "Machine stocked");
    Ok(added)
}
