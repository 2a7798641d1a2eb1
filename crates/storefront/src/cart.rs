//! Selected quantities per menu item.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{MenuCatalog, MenuItem};
use crate::error::OrderError;

/// Item name → selected quantity. Absent names mean zero.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    quantities: BTreeMap<String, u32>,
}

impl Cart {
    pub fn quantity(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Replace the quantity for `name`. Negative requests clamp to zero.
    /// Returns the stored quantity.
    pub fn set_quantity(
        &mut self,
        catalog: &MenuCatalog,
        name: &str,
        quantity: i64,
    ) -> Result<u32, OrderError> {
        if !catalog.contains(name) {
            return Err(OrderError::UnknownItem(name.to_string()));
        }
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if clamped == 0 {
            self.quantities.remove(name);
        } else {
            self.quantities.insert(name.to_string(), clamped);
        }
        Ok(clamped)
    }

    pub fn increment(&mut self, catalog: &MenuCatalog, name: &str) -> Result<u32, OrderError> {
        let next = i64::from(self.quantity(name)) + 1;
        self.set_quantity(catalog, name, next)
    }

    pub fn decrement(&mut self, catalog: &MenuCatalog, name: &str) -> Result<u32, OrderError> {
        let next = i64::from(self.quantity(name)) - 1;
        self.set_quantity(catalog, name, next)
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&q| q == 0)
    }

    /// Raw entries, including names the catalog may not know about.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.quantities.iter().map(|(name, &q)| (name.as_str(), q))
    }

    /// `(item, quantity)` for every item with a positive quantity, in menu order.
    pub fn items_in_cart<'a>(&self, catalog: &'a MenuCatalog) -> Vec<(&'a MenuItem, u32)> {
        catalog
            .items()
            .iter()
            .filter_map(|item| {
                let q = self.quantity(&item.name);
                (q > 0).then_some((item, q))
            })
            .collect()
    }

    /// Items selected in a positive quantity that is still under the item's
    /// minimum order. Advisory only.
    pub fn below_minimum<'a>(&self, catalog: &'a MenuCatalog) -> Vec<&'a MenuItem> {
        self.items_in_cart(catalog)
            .into_iter()
            .filter(|(item, q)| *q < item.min_order_qty)
            .map(|(item, _)| item)
            .collect()
    }

    /// Snapshot of positive quantities, keyed by name.
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.quantities
            .iter()
            .filter(|(_, q)| **q > 0)
            .map(|(name, &q)| (name.clone(), q))
            .collect()
    }

    /// Build a cart from raw entries without catalog checks. Used for
    /// carried-over snapshots such as the review page's bundle.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            quantities: entries
                .into_iter()
                .filter(|(_, q)| *q > 0)
                .map(|(name, q)| (name.into(), q))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        assert_eq!(cart.increment(&catalog, "Naan").unwrap(), 1);
        assert_eq!(cart.increment(&catalog, "Naan").unwrap(), 2);
        assert_eq!(cart.decrement(&catalog, "Naan").unwrap(), 1);
        assert_eq!(cart.quantity("Naan"), 1);
    }

    #[test]
    fn test_decrement_at_zero_stays_zero() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        assert_eq!(cart.decrement(&catalog, "Naan").unwrap(), 0);
        assert_eq!(cart.quantity("Naan"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_set_clamps() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        cart.set_quantity(&catalog, "Naan", 5).unwrap();
        assert_eq!(cart.set_quantity(&catalog, "Naan", -3).unwrap(), 0);
        assert_eq!(cart.quantity("Naan"), 0);
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        let err = cart.set_quantity(&catalog, "Pizza", 1).unwrap_err();
        assert_eq!(err, OrderError::UnknownItem("Pizza".to_string()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_items_in_cart_follow_menu_order() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        cart.set_quantity(&catalog, "Naan", 2).unwrap();
        cart.set_quantity(&catalog, "Chicken Biriyani", 3).unwrap();
        cart.set_quantity(&catalog, "Mutton Biriyani", 0).unwrap();
        let names: Vec<&str> = cart
            .items_in_cart(&catalog)
            .iter()
            .map(|(item, _)| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chicken Biriyani", "Naan"]);
    }

    #[test]
    fn test_below_minimum_flags_small_orders() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        cart.set_quantity(&catalog, "Naan", 10).unwrap();
        cart.set_quantity(&catalog, "Chicken Biriyani", 50).unwrap();
        let flagged: Vec<&str> = cart
            .below_minimum(&catalog)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(flagged, vec!["Naan"]);
    }

    #[test]
    fn test_snapshot_drops_zero_quantities() {
        let cart = Cart::from_entries([("Naan", 0), ("Chicken Biriyani", 4)]);
        let snap = cart.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("Chicken Biriyani"), Some(&4));
    }
}
