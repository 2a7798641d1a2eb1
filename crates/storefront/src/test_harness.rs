//! # TestStore — headless harness for storefront integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins`, `StatesPlugin` and
//! [`StorefrontPlugin`] so whole page flows can run without a window.
//! Time advances by a fixed step per frame so timer-driven behaviour is
//! deterministic.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::cart::Cart;
use crate::checkout::{CheckoutField, CheckoutForm, FormFeedback};
use crate::drawer::{DrawerClosed, DrawerState, ScrollToFooter};
use crate::handoff::{PendingOrder, ReviewOrder};
use crate::order_actions::{ActionQueue, ActionResult, ActionResultLog, FormKind, OrderAction};
use crate::route::Route;
use crate::StorefrontPlugin;

/// Simulated frame length.
pub const FRAME: Duration = Duration::from_millis(50);

/// Counts events emitted during the test run.
#[derive(Resource, Default)]
pub struct EventCounts {
    pub drawer_closed: usize,
    pub scroll_to_footer: usize,
}

fn count_events(
    mut counts: ResMut<EventCounts>,
    mut closed: EventReader<DrawerClosed>,
    mut scrolls: EventReader<ScrollToFooter>,
) {
    counts.drawer_closed += closed.read().count();
    counts.scroll_to_footer += scrolls.read().count();
}

pub struct TestStore {
    app: App,
}

impl TestStore {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A store starting on the landing page.
    pub fn new() -> Self {
        Self::starting_at(Route::Landing)
    }

    /// A store whose first page is `route`, as if the URL was opened directly.
    pub fn starting_at(route: Route) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_state(route);
        app.add_plugins(StorefrontPlugin);
        app.init_resource::<EventCounts>();
        app.add_systems(Update, count_events.after(crate::StorefrontSet::Timers));

        // Startup + initial OnEnter.
        app.update();

        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn update_n(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Queue one action and run two frames: one to execute it and one to
    /// apply any requested page change.
    pub fn act(&mut self, action: OrderAction) {
        self.app.world_mut().resource_mut::<ActionQueue>().push(action);
        self.update_n(2);
    }

    pub fn increment(&mut self, item: &str, times: usize) {
        for _ in 0..times {
            self.app
                .world_mut()
                .resource_mut::<ActionQueue>()
                .push(OrderAction::IncrementItem {
                    item: item.to_string(),
                });
        }
        self.update();
    }

    pub fn fill_checkout(&mut self, fields: &[(CheckoutField, &str)]) {
        self.fill(FormKind::Checkout, fields);
    }

    pub fn fill(&mut self, form: FormKind, fields: &[(CheckoutField, &str)]) {
        {
            let mut queue = self.app.world_mut().resource_mut::<ActionQueue>();
            for (field, value) in fields {
                queue.push(OrderAction::SetField {
                    form,
                    field: *field,
                    value: value.to_string(),
                });
            }
        }
        self.update();
    }

    pub fn fill_required(&mut self, form: FormKind) {
        self.fill(
            form,
            &[
                (CheckoutField::FullName, "Meena"),
                (CheckoutField::PhoneNumber, "98400 00000"),
                (CheckoutField::Address, "12 Lake Road"),
                (CheckoutField::Pincode, "600116"),
            ],
        );
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn route(&self) -> Route {
        *self.app.world().resource::<State<Route>>().get()
    }

    pub fn cart(&self) -> &Cart {
        self.app.world().resource::<Cart>()
    }

    pub fn checkout(&self) -> &CheckoutForm {
        self.app.world().resource::<CheckoutForm>()
    }

    pub fn feedback(&self) -> &FormFeedback {
        self.app.world().resource::<FormFeedback>()
    }

    pub fn pending(&self) -> &PendingOrder {
        self.app.world().resource::<PendingOrder>()
    }

    pub fn review(&self) -> &ReviewOrder {
        self.app.world().resource::<ReviewOrder>()
    }

    pub fn drawer(&self) -> &DrawerState {
        self.app.world().resource::<DrawerState>()
    }

    pub fn cart_notice(&self) -> Option<String> {
        self.app.world().resource::<ActionResultLog>().cart_notice()
    }

    pub fn events(&self) -> &EventCounts {
        self.app.world().resource::<EventCounts>()
    }

    pub fn last_result(&self) -> Option<&ActionResult> {
        self.app
            .world()
            .resource::<ActionResultLog>()
            .last_result_for(|_| true)
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
