//! Subtotal / delivery / total derivation.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::MenuCatalog;
use crate::config::DELIVERY_CHARGE_RUPEES;
use crate::money::Money;

pub const DELIVERY_CHARGE: Money = Money::from_rupees(DELIVERY_CHARGE_RUPEES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub delivery_charge: Money,
    pub total: Money,
}

/// Unit price × quantity, or zero for names not on the menu.
pub fn line_total(catalog: &MenuCatalog, name: &str, quantity: u32) -> Money {
    catalog
        .unit_price(name)
        .map_or(Money::ZERO, |price| price * quantity)
}

pub fn compute_totals(cart: &Cart, catalog: &MenuCatalog) -> OrderTotals {
    let subtotal: Money = cart
        .entries()
        .map(|(name, quantity)| line_total(catalog, name, quantity))
        .sum();
    OrderTotals {
        subtotal,
        delivery_charge: DELIVERY_CHARGE,
        total: subtotal + DELIVERY_CHARGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_costs_only_delivery() {
        let totals = compute_totals(&Cart::default(), &MenuCatalog::default());
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.total, Money::from_rupees(100));
    }

    #[test]
    fn test_two_biriyani_one_naan() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        cart.set_quantity(&catalog, "Chicken Biriyani", 2).unwrap();
        cart.set_quantity(&catalog, "Naan", 1).unwrap();
        let totals = compute_totals(&cart, &catalog);
        assert_eq!(totals.subtotal, Money::from_rupees(750));
        assert_eq!(totals.total, Money::from_rupees(850));
    }

    #[test]
    fn test_unknown_names_contribute_zero() {
        let catalog = MenuCatalog::default();
        let cart = Cart::from_entries([("Naan", 2), ("Pizza", 9)]);
        let totals = compute_totals(&cart, &catalog);
        assert_eq!(totals.subtotal, Money::from_rupees(500));
        assert_eq!(line_total(&catalog, "Pizza", 9), Money::ZERO);
    }

    #[test]
    fn test_total_is_always_subtotal_plus_delivery() {
        let catalog = MenuCatalog::default();
        let mut cart = Cart::default();
        for (i, item) in catalog.items().iter().enumerate() {
            cart.set_quantity(&catalog, &item.name, (i as i64) * 7).unwrap();
            let totals = compute_totals(&cart, &catalog);
            assert_eq!(totals.total, totals.subtotal + DELIVERY_CHARGE);
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let catalog = MenuCatalog::default();
        let cart = Cart::from_entries([("Mutton Biriyani", 3)]);
        assert_eq!(compute_totals(&cart, &catalog), compute_totals(&cart, &catalog));
    }
}
