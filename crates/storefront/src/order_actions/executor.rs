//! Action executor system: drains the [`ActionQueue`] each frame and applies
//! every queued [`OrderAction`], recording results in the [`ActionResultLog`].
//!
//! Each variant has a small execution function that validates inputs,
//! mutates the relevant resources and returns an [`ActionResult`].

use bevy::prelude::*;

use crate::cart::Cart;
use crate::catalog::MenuCatalog;
use crate::checkout::{CheckoutForm, EnquiryForm, FormFeedback};
use crate::drawer::{DrawerClosed, DrawerLink, DrawerState, FooterScroll};
use crate::handoff::{submit_order, PendingOrder, ReviewOrder};
use crate::route::Route;

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, FormKind, OrderAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
#[allow(clippy::too_many_arguments)]
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    catalog: Res<MenuCatalog>,
    mut cart: ResMut<Cart>,
    mut checkout: ResMut<CheckoutForm>,
    mut enquiry: ResMut<EnquiryForm>,
    mut feedback: ResMut<FormFeedback>,
    mut pending: ResMut<PendingOrder>,
    review: Res<ReviewOrder>,
    mut drawer: ResMut<DrawerState>,
    mut footer_scroll: ResMut<FooterScroll>,
    route: Res<State<Route>>,
    mut next_route: ResMut<NextState<Route>>,
    mut drawer_closed: EventWriter<DrawerClosed>,
) {
    if queue.is_empty() {
        return;
    }

    let mut ctx = ExecContext {
        catalog: &catalog,
        cart: &mut cart,
        checkout: &mut checkout,
        enquiry: &mut enquiry,
        feedback: &mut feedback,
        pending: &mut pending,
        review: &review,
        drawer: &mut drawer,
        footer_scroll: &mut footer_scroll,
        current_route: *route.get(),
        next_route: &mut next_route,
        drawer_closed: &mut drawer_closed,
    };

    for action in queue.drain() {
        let result = execute_single(&action, &mut ctx);
        if let ActionResult::Error(e) = &result {
            warn!("Action {:?} rejected: {}", action, e);
        }
        log.push(action, result);
    }
}

struct ExecContext<'a, 'w> {
    catalog: &'a MenuCatalog,
    cart: &'a mut Cart,
    checkout: &'a mut CheckoutForm,
    enquiry: &'a mut EnquiryForm,
    feedback: &'a mut FormFeedback,
    pending: &'a mut PendingOrder,
    review: &'a ReviewOrder,
    drawer: &'a mut DrawerState,
    footer_scroll: &'a mut FooterScroll,
    current_route: Route,
    next_route: &'a mut NextState<Route>,
    drawer_closed: &'a mut EventWriter<'w, DrawerClosed>,
}

impl ExecContext<'_, '_> {
    /// Request a page change. Navigating to the current page is a no-op, so
    /// the page keeps its state.
    fn navigate(&mut self, target: Route) {
        if target != self.current_route {
            self.next_route.set(target);
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn execute_single(action: &OrderAction, ctx: &mut ExecContext) -> ActionResult {
    match action {
        OrderAction::Navigate { route } => {
            ctx.navigate(*route);
            ActionResult::Success
        }
        OrderAction::SetQuantity { item, quantity } => {
            execute_set_quantity(item, *quantity, ctx)
        }
        OrderAction::IncrementItem { item } => ctx.cart.increment(ctx.catalog, item).into(),
        OrderAction::DecrementItem { item } => execute_decrement(item, ctx),
        OrderAction::SetField { form, field, value } => {
            match form {
                FormKind::Checkout => ctx.checkout.set_field(*field, value.clone()),
                FormKind::Enquiry => ctx.enquiry.0.set_field(*field, value.clone()),
            }
            ActionResult::Success
        }
        OrderAction::SubmitCheckout => execute_submit_checkout(ctx),
        OrderAction::SubmitEnquiry => execute_submit_enquiry(ctx),
        OrderAction::ConfirmOrder => {
            match ctx.review.active() {
                Ok(bundle) => info!("Order confirmed, total {}", bundle.order_total),
                Err(e) => info!("Sample order confirmed ({})", e),
            }
            ctx.navigate(Route::Final);
            ActionResult::Success
        }
        OrderAction::OpenDrawer => {
            if ctx.drawer.open() {
                ActionResult::Success
            } else {
                ActionResult::SuccessWithWarning("drawer is already open".to_string())
            }
        }
        OrderAction::CloseDrawer => {
            if ctx.drawer.request_close() {
                ActionResult::Success
            } else {
                ActionResult::SuccessWithWarning("drawer is not open".to_string())
            }
        }
        OrderAction::FollowDrawerLink { link } => execute_drawer_link(*link, ctx),
    }
}

// ---------------------------------------------------------------------------
// Per-action execution
// ---------------------------------------------------------------------------

fn execute_set_quantity(item: &str, quantity: i64, ctx: &mut ExecContext) -> ActionResult {
    match ctx.cart.set_quantity(ctx.catalog, item, quantity) {
        Ok(_) if quantity < 0 => {
            ActionResult::SuccessWithWarning(format!("{item} clamped to 0"))
        }
        Ok(_) => ActionResult::Success,
        Err(e) => ActionResult::Error(e),
    }
}

fn execute_decrement(item: &str, ctx: &mut ExecContext) -> ActionResult {
    let was_empty = ctx.cart.quantity(item) == 0;
    match ctx.cart.decrement(ctx.catalog, item) {
        Ok(_) if was_empty => ActionResult::SuccessWithWarning(format!("{item} is already at 0")),
        Ok(_) => ActionResult::Success,
        Err(e) => ActionResult::Error(e),
    }
}

fn execute_submit_checkout(ctx: &mut ExecContext) -> ActionResult {
    match submit_order(ctx.cart, ctx.checkout, ctx.catalog) {
        Ok(bundle) => {
            info!(
                "Order submitted: {}",
                serde_json::to_string(&bundle).unwrap_or_default()
            );
            ctx.pending.0 = Some(bundle);
            ctx.feedback.checkout = None;
            ctx.navigate(Route::Review);
            ActionResult::Success
        }
        Err(e) => {
            ctx.feedback.checkout = Some(e.clone());
            ActionResult::Error(e)
        }
    }
}

fn execute_submit_enquiry(ctx: &mut ExecContext) -> ActionResult {
    match ctx.enquiry.0.validate() {
        Ok(()) => {
            info!(
                "Enquiry submitted: {}",
                serde_json::to_string(&ctx.enquiry.0).unwrap_or_default()
            );
            ctx.feedback.enquiry = None;
            ctx.navigate(Route::MenuPreview);
            ActionResult::Success
        }
        Err(errors) => {
            ctx.feedback.enquiry = Some(errors.clone());
            ActionResult::Error(errors.into())
        }
    }
}

fn execute_drawer_link(link: DrawerLink, ctx: &mut ExecContext) -> ActionResult {
    if ctx.drawer.close_now() {
        ctx.drawer_closed.send(DrawerClosed);
    }
    match link {
        DrawerLink::Home => ctx.navigate(Route::Landing),
        DrawerLink::Menu => ctx.navigate(Route::Menu),
        DrawerLink::ContactUs => ctx.footer_scroll.schedule(),
    }
    ActionResult::Success
}
