use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use storefront::cart::Cart;
use storefront::catalog::{MenuCatalog, MenuItem};
use storefront::checkout::{CheckoutForm, FormFeedback, MENU_BRANCHES};
use storefront::order_actions::{ActionQueue, ActionResultLog, FormKind, OrderAction};
use storefront::totals::{compute_totals, line_total};

use crate::page::{show_page, FooterScrollRequest};
use crate::theme;
use crate::ui_widgets::{
    caption, card, checkout_fields, money_row, primary_button, quantity_stepper, red_band,
    themed_heading, themed_subheading,
};

pub fn menu_page_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut footer_scroll: ResMut<FooterScrollRequest>,
    catalog: Res<MenuCatalog>,
    cart: Res<Cart>,
    form: Res<CheckoutForm>,
    feedback: Res<FormFeedback>,
    log: Res<ActionResultLog>,
) {
    let cart_notice = log.cart_notice();
    let ctx = contexts.ctx_mut();
    show_page(ctx, &mut queue, &mut footer_scroll, |ui, queue| {
        hero(ui);
        ui.add_space(theme::SECTION_SPACING);
        for item in catalog.items() {
            menu_item_card(ui, queue, item, cart.quantity(&item.name));
            ui.add_space(theme::ITEM_SPACING);
        }
        ui.add_space(theme::SECTION_SPACING);
        order_summary(ui, &cart, &catalog, cart_notice.as_deref());
        ui.add_space(theme::SECTION_SPACING);
        checkout_form(ui, queue, &form, &feedback);
    });
}

fn hero(ui: &mut egui::Ui) {
    red_band(ui, |ui| {
        ui.add_space(theme::ITEM_SPACING);
        for line in ["Hosting a feast?", "Get your favorite"] {
            ui.label(
                egui::RichText::new(line)
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_ON_RED),
            );
        }
        ui.label(
            egui::RichText::new("Biriyani in bulk")
                .size(theme::FONT_TITLE)
                .color(theme::AMBER)
                .strong(),
        );
        for line in ["and serve up", "smiles!"] {
            ui.label(
                egui::RichText::new(line)
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_ON_RED),
            );
        }
        ui.add_space(theme::ITEM_SPACING);
    });
}

fn menu_item_card(ui: &mut egui::Ui, queue: &mut ActionQueue, item: &MenuItem, quantity: u32) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                themed_subheading(ui, &item.name);
                ui.label(
                    egui::RichText::new(item.unit_price.price())
                        .size(theme::FONT_BODY)
                        .strong(),
                );
                caption(ui, &format!("Min. order {}", item.min_order_qty));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                quantity_stepper(ui, queue, &item.name, quantity);
            });
        });
        ui.label(
            egui::RichText::new(&item.description)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
        if item.is_bundle() {
            let contents: Vec<String> = item
                .bundle_contents
                .iter()
                .map(|b| format!("{} x{}", b.name, b.quantity))
                .collect();
            caption(ui, &format!("Includes: {}", contents.join(", ")));
        }
    });
}

fn order_summary(ui: &mut egui::Ui, cart: &Cart, catalog: &MenuCatalog, notice: Option<&str>) {
    card(ui, |ui| {
        themed_heading(ui, "Order Summary");
        ui.add_space(theme::ITEM_SPACING);
        if let Some(notice) = notice {
            ui.label(
                egui::RichText::new(notice)
                    .size(theme::FONT_SMALL)
                    .color(theme::WARNING),
            );
        }

        let lines = cart.items_in_cart(catalog);
        if lines.is_empty() {
            caption(ui, "Your cart is empty. Add items to see order summary.");
            return;
        }

        for (item, quantity) in &lines {
            money_row(
                ui,
                &format!("{} x {}", item.name, quantity),
                line_total(catalog, &item.name, *quantity),
                false,
            );
        }
        for item in cart.below_minimum(catalog) {
            ui.label(
                egui::RichText::new(format!(
                    "Minimum order for {} is {}",
                    item.name, item.min_order_qty
                ))
                .size(theme::FONT_SMALL)
                .color(theme::WARNING),
            );
        }

        ui.separator();
        let totals = compute_totals(cart, catalog);
        money_row(ui, "Subtotal", totals.subtotal, false);
        money_row(ui, "Delivery Charges", totals.delivery_charge, false);
        money_row(ui, "Total", totals.total, true);
    });
}

fn checkout_form(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    form: &CheckoutForm,
    feedback: &FormFeedback,
) {
    card(ui, |ui| {
        themed_heading(ui, "Checkout");
        ui.add_space(theme::ITEM_SPACING);
        checkout_fields(
            ui,
            queue,
            FormKind::Checkout,
            form,
            &MENU_BRANCHES,
            |field| feedback.checkout_problem(field),
        );
        if let Some(error) = &feedback.checkout {
            ui.label(
                egui::RichText::new(error.to_string())
                    .size(theme::FONT_SMALL)
                    .color(theme::ERROR),
            );
        }
        ui.vertical_centered(|ui| {
            if primary_button(ui, "Confirm").clicked() {
                queue.push(OrderAction::SubmitCheckout);
            }
        });
    });
}
