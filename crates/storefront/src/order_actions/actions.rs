use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutField;
use crate::drawer::DrawerLink;
use crate::route::Route;

/// Which form a field edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    /// Checkout form on the menu page; feeds the review handoff.
    Checkout,
    /// Enquiry form on the landing page; leads to the menu preview.
    Enquiry,
}

/// Every user interaction the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderAction {
    Navigate {
        route: Route,
    },
    SetQuantity {
        item: String,
        quantity: i64,
    },
    IncrementItem {
        item: String,
    },
    DecrementItem {
        item: String,
    },
    SetField {
        form: FormKind,
        field: CheckoutField,
        value: String,
    },
    SubmitCheckout,
    SubmitEnquiry,
    /// Review page "Submit".
    ConfirmOrder,
    OpenDrawer,
    CloseDrawer,
    FollowDrawerLink {
        link: DrawerLink,
    },
}

impl OrderAction {
    /// Whether the action changes a cart quantity.
    pub fn is_cart_edit(&self) -> bool {
        matches!(
            self,
            OrderAction::SetQuantity { .. }
                | OrderAction::IncrementItem { .. }
                | OrderAction::DecrementItem { .. }
        )
    }
}
