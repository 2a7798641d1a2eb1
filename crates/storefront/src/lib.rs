use bevy::prelude::*;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod drawer;
pub mod error;
pub mod handoff;
pub mod money;
pub mod order_actions;
pub mod pages;
pub mod route;
pub mod settings;
pub mod totals;

#[cfg(test)]
pub mod test_harness;

use route::Route;

/// Ordering of the storefront's per-frame work.
///
/// UI systems push actions before `Actions`; the executor applies them; then
/// timers advance.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorefrontSet {
    Actions,
    Timers,
}

pub struct StorefrontPlugin;

impl Plugin for StorefrontPlugin {
    fn build(&self, app: &mut App) {
        // Keeps a route inserted by the binary (deep link) if one is present.
        app.init_state::<Route>();

        app.init_resource::<catalog::MenuCatalog>()
            .init_resource::<cart::Cart>()
            .init_resource::<checkout::CheckoutForm>()
            .init_resource::<checkout::EnquiryForm>()
            .init_resource::<checkout::FormFeedback>()
            .init_resource::<handoff::PendingOrder>()
            .init_resource::<handoff::ReviewOrder>()
            .init_resource::<drawer::DrawerState>()
            .init_resource::<drawer::FooterScroll>()
            .init_resource::<settings::StorefrontSettings>()
            .init_resource::<order_actions::ActionQueue>()
            .init_resource::<order_actions::ActionResultLog>()
            .add_event::<drawer::DrawerClosed>()
            .add_event::<drawer::ScrollToFooter>();

        app.configure_sets(Update, (StorefrontSet::Actions, StorefrontSet::Timers).chain());

        app.add_systems(
            Update,
            order_actions::execute_queued_actions.in_set(StorefrontSet::Actions),
        )
        .add_systems(
            Update,
            (drawer::tick_drawer, drawer::tick_footer_scroll).in_set(StorefrontSet::Timers),
        )
        .add_systems(Update, route::log_route_changes);

        app.add_systems(OnEnter(Route::Landing), pages::mount_landing_page)
            .add_systems(OnEnter(Route::Menu), pages::mount_menu_page)
            .add_systems(OnEnter(Route::Review), pages::mount_review_page)
            .add_systems(OnExit(Route::Review), pages::unmount_review_page);

        for route in Route::ALL {
            app.add_systems(OnExit(route), drawer::teardown_overlays);
        }
    }
}
