//! Cross-page order handoff.
//!
//! Submitting the checkout form produces a [`HandoffBundle`] that is parked in
//! [`PendingOrder`] until the review page mounts. The review page takes it
//! exactly once into [`ReviewOrder`]; leaving the page discards it, so a
//! reload or a direct visit sees [`ReviewOrder::NoActiveOrder`].
//!
//! Whether that absent case renders the sample order is left to the caller
//! via [`ReviewOrder::displayed`].

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::MenuCatalog;
use crate::checkout::{CheckoutField, CheckoutForm};
use crate::error::OrderError;
use crate::money::Money;
use crate::totals::{compute_totals, OrderTotals};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffBundle {
    pub cart_items: BTreeMap<String, u32>,
    pub form_data: CheckoutForm,
    pub order_total: Money,
}

impl HandoffBundle {
    pub fn cart(&self) -> Cart {
        Cart::from_entries(self.cart_items.iter().map(|(name, &q)| (name.as_str(), q)))
    }

    /// Totals recomputed against the catalog.
    pub fn totals(&self, catalog: &MenuCatalog) -> OrderTotals {
        compute_totals(&self.cart(), catalog)
    }

    /// Line items in menu order; names the catalog does not know come last.
    pub fn lines(&self, catalog: &MenuCatalog) -> Vec<(&str, u32)> {
        let mut lines: Vec<(&str, u32)> = self
            .cart_items
            .iter()
            .map(|(name, &q)| (name.as_str(), q))
            .collect();
        lines.sort_by_key(|(name, _)| catalog.position(name).unwrap_or(usize::MAX));
        lines
    }
}

/// Validate the form and snapshot the cart into a bundle.
pub fn submit_order(
    cart: &Cart,
    form: &CheckoutForm,
    catalog: &MenuCatalog,
) -> Result<HandoffBundle, OrderError> {
    form.validate()?;
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    let totals = compute_totals(cart, catalog);
    Ok(HandoffBundle {
        cart_items: cart.snapshot(),
        form_data: form.clone(),
        order_total: totals.total,
    })
}

/// The order waiting for the review page to mount.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingOrder(pub Option<HandoffBundle>);

impl PendingOrder {
    /// Take the pending bundle. A second call returns `None`.
    pub fn read_handoff(&mut self) -> Option<HandoffBundle> {
        self.0.take()
    }
}

/// What the review page is showing.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub enum ReviewOrder {
    #[default]
    NoActiveOrder,
    Active(HandoffBundle),
}

/// A bundle ready to render, flagged when it is the built-in sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedOrder {
    pub bundle: HandoffBundle,
    pub is_sample: bool,
}

impl ReviewOrder {
    pub fn from_handoff(bundle: Option<HandoffBundle>) -> Self {
        match bundle {
            Some(bundle) => ReviewOrder::Active(bundle),
            None => ReviewOrder::NoActiveOrder,
        }
    }

    pub fn active(&self) -> Result<&HandoffBundle, OrderError> {
        match self {
            ReviewOrder::Active(bundle) => Ok(bundle),
            ReviewOrder::NoActiveOrder => Err(OrderError::NoActiveOrder),
        }
    }

    /// The bundle to render. With `sample_fallback` the absent case yields
    /// [`sample_bundle`]; without it the caller gets `None` and should show an
    /// empty state.
    pub fn displayed(&self, sample_fallback: bool) -> Option<DisplayedOrder> {
        match self {
            ReviewOrder::Active(bundle) => Some(DisplayedOrder {
                bundle: bundle.clone(),
                is_sample: false,
            }),
            ReviewOrder::NoActiveOrder if sample_fallback => Some(DisplayedOrder {
                bundle: sample_bundle(),
                is_sample: true,
            }),
            ReviewOrder::NoActiveOrder => None,
        }
    }
}

/// The demo order shown on a direct visit to the review page.
pub fn sample_bundle() -> HandoffBundle {
    let mut form = CheckoutForm::default();
    form.set_field(CheckoutField::FullName, "Arjitha");
    form.set_field(CheckoutField::PhoneNumber, "+91 9566293703");
    form.set_field(CheckoutField::Branch, "Porur");
    form.set_field(CheckoutField::DeliveryTime, "18th March 2025, 02:00 p.m");
    form.set_field(CheckoutField::Address, "Porur");
    form.set_field(CheckoutField::Pincode, "6000087");
    form.set_field(CheckoutField::Landmark, "-");

    let cart_items: BTreeMap<String, u32> = [("Chicken Biriyani", 70), ("Naan", 50)]
        .into_iter()
        .map(|(name, q)| (name.to_string(), q))
        .collect();
    let order_total = compute_totals(
        &Cart::from_entries(cart_items.iter().map(|(n, &q)| (n.as_str(), q))),
        &MenuCatalog::default(),
    )
    .total;

    HandoffBundle {
        cart_items,
        form_data: form,
        order_total,
    }
}
