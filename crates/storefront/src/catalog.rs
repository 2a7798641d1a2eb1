//! The fixed menu the storefront sells from.
//!
//! [`MenuCatalog`] is built once at start-up and never mutated. Item names are
//! the keys every other part of the order flow (cart, totals, handoff) uses.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One entry of a combo's contents, e.g. "Naan x2".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleItem {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub unit_price: Money,
    pub min_order_qty: u32,
    pub image_ref: String,
    pub description: String,
    /// Empty for single dishes.
    pub bundle_contents: Vec<BundleItem>,
}

impl MenuItem {
    pub fn is_bundle(&self) -> bool {
        !self.bundle_contents.is_empty()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from explicit items. Later duplicates of a name are
    /// dropped with a warning so lookups stay unambiguous.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut unique: Vec<MenuItem> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().any(|existing| existing.name == item.name) {
                warn!("MenuCatalog: duplicate item name '{}' ignored", item.name);
                continue;
            }
            unique.push(item);
        }
        Self { items: unique }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Unit price for `name`, or `None` for names not on the menu.
    pub fn unit_price(&self, name: &str) -> Option<Money> {
        self.get(name).map(|item| item.unit_price)
    }

    /// Position of `name` in menu order; used to sort cart listings.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}

fn dish(id: u32, name: &str, image_ref: &str, description: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        unit_price: Money::from_rupees(250),
        min_order_qty: 50,
        image_ref: image_ref.to_string(),
        description: description.to_string(),
        bundle_contents: Vec::new(),
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        let mut combo = dish(
            4,
            "Biriyani Combo",
            "images/c.png",
            "Enjoy the ultimate feast with our Biriyani Combo! A perfect combination of \
             aromatic biriyani, flavorful side dishes, and refreshing raita.",
        );
        combo.bundle_contents = vec![
            BundleItem {
                name: "Bread Halwa".to_string(),
                quantity: 1,
            },
            BundleItem {
                name: "Biriyani".to_string(),
                quantity: 1,
            },
            BundleItem {
                name: "Naan".to_string(),
                quantity: 2,
            },
        ];

        Self::new(vec![
            dish(
                1,
                "Chicken Biriyani",
                "images/c.png",
                "Indulge in our aromatic, perfectly spiced Chicken Biriyani, made with tender, \
                 juicy chicken, fragrant basmati rice, and a blend of rich, handpicked spices.",
            ),
            dish(
                2,
                "Mutton Biriyani",
                "images/m.png",
                "Savor the irresistible taste of our Mutton Biriyani, crafted with succulent, \
                 slow-cooked mutton, fragrant basmati rice, and a blend of aromatic spices.",
            ),
            dish(
                3,
                "Plain Biriyani",
                "images/p.png",
                "Enjoy the rich aroma and delicate flavors of our perfectly cooked Plain \
                 Biriyani. Made with premium basmati rice and a blend of fragrant spices.",
            ),
            combo,
            dish(
                5,
                "Naan",
                "images/n.png",
                "Freshly baked to perfection, our Naan is soft, buttery, and slightly crisp on \
                 the edges. Made with the finest ingredients.",
            ),
        ])
    }
}
