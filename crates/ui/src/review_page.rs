use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use storefront::catalog::MenuCatalog;
use storefront::checkout::{Branch, CheckoutField};
use storefront::handoff::{DisplayedOrder, HandoffBundle, ReviewOrder};
use storefront::order_actions::{ActionQueue, OrderAction};
use storefront::route::Route;
use storefront::settings::StorefrontSettings;
use storefront::totals::line_total;

use crate::page::{show_page, FooterScrollRequest};
use crate::theme;
use crate::ui_widgets::{
    caption, card, money_row, primary_button, text_link, themed_heading, themed_subheading,
};

/// Label/value pairs of the "Details" block, in display order.
pub fn detail_rows(bundle: &HandoffBundle) -> Vec<(&'static str, String)> {
    CheckoutField::ALL
        .into_iter()
        .map(|field| {
            let raw = bundle.form_data.get(field);
            let value = match field {
                CheckoutField::Branch => Branch::from_value(raw)
                    .map(|b| b.label().to_string())
                    .unwrap_or_else(|| raw.to_string()),
                _ => raw.to_string(),
            };
            (field.label(), value)
        })
        .collect()
}

pub fn review_page_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut footer_scroll: ResMut<FooterScrollRequest>,
    catalog: Res<MenuCatalog>,
    review: Res<ReviewOrder>,
    settings: Res<StorefrontSettings>,
) {
    let displayed = review.displayed(settings.sample_order_fallback);
    let ctx = contexts.ctx_mut();
    show_page(ctx, &mut queue, &mut footer_scroll, |ui, queue| {
        ui.add_space(theme::SECTION_SPACING);
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            themed_heading(ui, "Review");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(16.0);
                if text_link(ui, "Explore Menu →").clicked() {
                    queue.push(OrderAction::Navigate { route: Route::Menu });
                }
            });
        });
        ui.add_space(theme::ITEM_SPACING);

        match &displayed {
            Some(order) => order_review(ui, queue, &catalog, order),
            None => empty_state(ui, queue),
        }
    });
}

fn order_review(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    catalog: &MenuCatalog,
    order: &DisplayedOrder,
) {
    let bundle = &order.bundle;
    if order.is_sample {
        caption(ui, "Showing a sample order. Build your own from the menu.");
    }

    card(ui, |ui| {
        for (name, quantity) in bundle.lines(catalog) {
            money_row(
                ui,
                &format!("{name} x {quantity}"),
                line_total(catalog, name, quantity),
                false,
            );
        }
        ui.separator();
        let totals = bundle.totals(catalog);
        money_row(ui, "Subtotal", totals.subtotal, false);
        money_row(ui, "Delivery Charges", totals.delivery_charge, false);
        money_row(ui, "Total", bundle.order_total, true);
    });

    ui.add_space(theme::SECTION_SPACING);
    card(ui, |ui| {
        themed_subheading(ui, "Details");
        ui.add_space(theme::ITEM_SPACING);
        egui::Grid::new("review_details")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in detail_rows(bundle) {
                    ui.label(
                        egui::RichText::new(format!("{label}:"))
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.label(egui::RichText::new(value).size(theme::FONT_BODY));
                    ui.end_row();
                }
            });
    });

    ui.add_space(theme::SECTION_SPACING);
    ui.vertical_centered(|ui| {
        if primary_button(ui, "Submit").clicked() {
            queue.push(OrderAction::ConfirmOrder);
        }
    });
}

fn empty_state(ui: &mut egui::Ui, queue: &mut ActionQueue) {
    card(ui, |ui| {
        ui.vertical_centered(|ui| {
            themed_subheading(ui, "No order in progress");
            caption(ui, "Pick a few dishes from the menu to start an order.");
            ui.add_space(theme::ITEM_SPACING);
            if primary_button(ui, "Explore Menu").clicked() {
                queue.push(OrderAction::Navigate { route: Route::Menu });
            }
        });
    });
}
