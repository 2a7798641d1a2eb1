//! Browser URL integration for the WASM build.
//!
//! The starting page comes from `location.pathname`; every page change after
//! that is pushed onto `history`, and back/forward navigation is followed by
//! queuing a navigate action.

#![cfg(target_arch = "wasm32")]

use bevy::prelude::*;
use storefront::order_actions::{ActionQueue, OrderAction};
use storefront::route::Route;
use wasm_bindgen::JsValue;

fn current_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Route for the URL the page was loaded with.
pub fn initial_route() -> Route {
    let path = current_pathname().unwrap_or_default();
    Route::from_path_or_landing(&path)
}

/// Push the new page's path when the route changes.
pub fn push_history(route: Res<State<Route>>) {
    if !route.is_changed() {
        return;
    }
    let path = route.get().path();
    if current_pathname().as_deref() == Some(path) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = result {
        warn!("Failed to push history entry for {}: {:?}", path, e);
    }
}

/// Follow back/forward buttons: if the address bar names another known page,
/// navigate there.
pub fn follow_location(route: Res<State<Route>>, mut queue: ResMut<ActionQueue>) {
    if route.is_changed() {
        return;
    }
    let Some(target) = current_pathname().and_then(|path| Route::from_path(&path)) else {
        return;
    };
    if target != *route.get() {
        queue.push(OrderAction::Navigate { route: target });
    }
}
