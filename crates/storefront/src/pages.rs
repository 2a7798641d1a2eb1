//! Page mount/unmount hooks.
//!
//! Page-local state behaves like a component that remounts on every visit:
//! the menu page starts with an empty cart and blank checkout form, the
//! landing page with a blank enquiry form. The review page takes the pending
//! handoff on mount and forgets it on unmount.

use bevy::prelude::*;

use crate::cart::Cart;
use crate::checkout::{CheckoutForm, EnquiryForm, FormFeedback};
use crate::handoff::{PendingOrder, ReviewOrder};

pub fn mount_landing_page(mut enquiry: ResMut<EnquiryForm>, mut feedback: ResMut<FormFeedback>) {
    enquiry.0.clear();
    feedback.enquiry = None;
}

pub fn mount_menu_page(
    mut cart: ResMut<Cart>,
    mut checkout: ResMut<CheckoutForm>,
    mut feedback: ResMut<FormFeedback>,
) {
    cart.clear();
    checkout.clear();
    feedback.checkout = None;
}

pub fn mount_review_page(mut pending: ResMut<PendingOrder>, mut review: ResMut<ReviewOrder>) {
    let bundle = pending.read_handoff();
    if bundle.is_none() {
        info!("Review page opened without a submitted order");
    }
    *review = ReviewOrder::from_handoff(bundle);
}

pub fn unmount_review_page(mut review: ResMut<ReviewOrder>) {
    *review = ReviewOrder::NoActiveOrder;
}
