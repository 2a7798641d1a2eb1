//! Opening the review page without a submitted order.

use crate::checkout::CheckoutField;
use crate::error::OrderError;
use crate::handoff::ReviewOrder;
use crate::money::Money;
use crate::route::Route;
use crate::settings::StorefrontSettings;
use crate::test_harness::TestStore;

#[test]
fn test_direct_visit_has_no_active_order() {
    let store = TestStore::starting_at(Route::Review);
    assert_eq!(store.route(), Route::Review);
    assert_eq!(*store.review(), ReviewOrder::NoActiveOrder);
    assert_eq!(store.review().active(), Err(OrderError::NoActiveOrder));
}

#[test]
fn test_direct_visit_displays_sample_by_default() {
    let mut store = TestStore::starting_at(Route::Review);
    let fallback = store
        .world_mut()
        .resource::<StorefrontSettings>()
        .sample_order_fallback;
    assert!(fallback);

    let shown = store.review().displayed(fallback).unwrap();
    assert!(shown.is_sample);
    assert_eq!(shown.bundle.cart_items.get("Chicken Biriyani"), Some(&70));
    assert_eq!(shown.bundle.cart_items.get("Naan"), Some(&50));
    assert_eq!(shown.bundle.form_data.get(CheckoutField::FullName), "Arjitha");
    assert_eq!(shown.bundle.order_total, Money::from_rupees(30_100));
}

#[test]
fn test_fallback_can_be_turned_off() {
    let store = TestStore::starting_at(Route::Review);
    assert!(store.review().displayed(false).is_none());
}
