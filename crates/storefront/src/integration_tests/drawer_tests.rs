//! Drawer open/close timing and teardown.

use crate::drawer::{DrawerLink, DrawerState};
use crate::order_actions::OrderAction;
use crate::route::Route;
use crate::test_harness::TestStore;

#[test]
fn test_open_then_immediate_close_fires_exactly_one_close() {
    let mut store = TestStore::new();
    store.act(OrderAction::OpenDrawer);
    assert!(matches!(store.drawer(), DrawerState::Open));

    store.act(OrderAction::CloseDrawer);
    assert!(store.drawer().is_closing());
    assert_eq!(store.events().drawer_closed, 0);

    store.update_n(10);
    assert!(!store.drawer().is_visible());
    assert_eq!(store.events().drawer_closed, 1);
}

#[test]
fn test_double_close_still_fires_once() {
    let mut store = TestStore::new();
    store.act(OrderAction::OpenDrawer);
    store.act(OrderAction::CloseDrawer);
    store.act(OrderAction::CloseDrawer);
    store.update_n(10);
    assert_eq!(store.events().drawer_closed, 1);
}

#[test]
fn test_route_link_closes_immediately_and_navigates() {
    let mut store = TestStore::new();
    store.act(OrderAction::OpenDrawer);
    store.act(OrderAction::FollowDrawerLink {
        link: DrawerLink::Menu,
    });
    assert_eq!(store.route(), Route::Menu);
    assert!(!store.drawer().is_visible());
    assert_eq!(store.events().drawer_closed, 1);
}

#[test]
fn test_link_during_closing_animation_fires_once() {
    let mut store = TestStore::new();
    store.act(OrderAction::OpenDrawer);
    store.act(OrderAction::CloseDrawer);
    store.act(OrderAction::FollowDrawerLink {
        link: DrawerLink::Menu,
    });
    store.update_n(10);
    assert_eq!(store.events().drawer_closed, 1);
}

#[test]
fn test_page_change_cancels_pending_close_timer() {
    let mut store = TestStore::new();
    store.act(OrderAction::OpenDrawer);
    store.act(OrderAction::CloseDrawer);
    assert!(store.drawer().is_closing());

    store.act(OrderAction::Navigate { route: Route::Menu });
    store.update_n(10);
    assert!(!store.drawer().is_visible());
    assert_eq!(store.events().drawer_closed, 0);
}

#[test]
fn test_contact_us_scrolls_to_footer_after_delay() {
    let mut store = TestStore::new();
    store.act(OrderAction::OpenDrawer);
    store.act(OrderAction::FollowDrawerLink {
        link: DrawerLink::ContactUs,
    });
    assert_eq!(store.route(), Route::Landing);
    assert_eq!(store.events().drawer_closed, 1);

    store.update_n(10);
    assert_eq!(store.events().scroll_to_footer, 1);
}
