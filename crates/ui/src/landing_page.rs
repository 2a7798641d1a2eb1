use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use storefront::catalog::{MenuCatalog, MenuItem};
use storefront::checkout::{EnquiryForm, FormFeedback, LANDING_BRANCHES};
use storefront::order_actions::{ActionQueue, FormKind, OrderAction};
use storefront::route::Route;

use crate::page::{show_page, FooterScrollRequest};
use crate::theme;
use crate::ui_widgets::{
    card, caption, checkout_fields, primary_button, red_band, secondary_button, text_link,
    themed_heading, themed_subheading,
};

const PRODUCT_CARD_WIDTH: f32 = 220.0;

pub fn landing_page_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut footer_scroll: ResMut<FooterScrollRequest>,
    catalog: Res<MenuCatalog>,
    enquiry: Res<EnquiryForm>,
    feedback: Res<FormFeedback>,
) {
    let ctx = contexts.ctx_mut();
    show_page(ctx, &mut queue, &mut footer_scroll, |ui, queue| {
        hero(ui);
        product_showcase(ui, queue, &catalog);
        tagline(ui);
        enquiry_form(ui, queue, &enquiry, &feedback);
    });
}

fn hero(ui: &mut egui::Ui) {
    red_band(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SECTION_SPACING);
            for (line, size) in [
                ("Feast with", 36.0),
                ("BIRIYANI", 48.0),
                ("Served at your", 30.0),
                ("HOME", 42.0),
            ] {
                ui.label(
                    egui::RichText::new(line)
                        .size(size)
                        .color(theme::TEXT_ON_RED)
                        .strong(),
                );
            }
            ui.add_space(theme::SECTION_SPACING);
        });
    });
}

fn product_showcase(ui: &mut egui::Ui, queue: &mut ActionQueue, catalog: &MenuCatalog) {
    egui::Frame::NONE
        .fill(theme::GOLDENROD)
        .inner_margin(egui::Margin::symmetric(12, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                themed_subheading(ui, "Order in bulk, share the joy");
                themed_subheading(ui, "with your friends and family!");
            });
            ui.add_space(theme::ITEM_SPACING);

            egui::ScrollArea::horizontal()
                .id_salt("product_showcase")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 16.0;
                        for item in catalog.items() {
                            product_card(ui, queue, item);
                        }
                    });
                });

            ui.add_space(theme::SECTION_SPACING);
            egui::Frame::NONE
                .fill(egui::Color32::BLACK)
                .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new("Craving Biriyani? Order now & feast at home!")
                            .size(theme::FONT_BODY)
                            .color(egui::Color32::WHITE)
                            .strong(),
                    );
                    ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);
                    if text_link(ui, "Explore Menu →").clicked() {
                        queue.push(OrderAction::Navigate { route: Route::Menu });
                    }
                });
        });
}

fn product_card(ui: &mut egui::Ui, queue: &mut ActionQueue, item: &MenuItem) {
    ui.allocate_ui(egui::vec2(PRODUCT_CARD_WIDTH, 0.0), |ui| {
        card(ui, |ui| {
            ui.vertical_centered(|ui| {
                themed_subheading(ui, &item.name);
                ui.label(
                    egui::RichText::new(item.unit_price.price())
                        .size(theme::FONT_BODY)
                        .strong(),
                );
                caption(ui, &format!("Min. order {}", item.min_order_qty));
                ui.add_space(theme::ITEM_SPACING);
                if secondary_button(ui, "Order Now").clicked() {
                    queue.push(OrderAction::Navigate { route: Route::Menu });
                }
            });
        });
    });
}

fn tagline(ui: &mut egui::Ui) {
    ui.add_space(theme::SECTION_SPACING);
    ui.vertical_centered(|ui| {
        for line in [
            "Get your biriyani hassle-free,",
            "no heavy sign-ins,",
            "just pure indulgence!",
        ] {
            ui.label(egui::RichText::new(line).size(theme::FONT_SUBHEADING).italics());
        }
    });
    ui.add_space(theme::SECTION_SPACING);
}

fn enquiry_form(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    enquiry: &EnquiryForm,
    feedback: &FormFeedback,
) {
    card(ui, |ui| {
        themed_heading(ui, "Place an enquiry");
        ui.add_space(theme::ITEM_SPACING);
        checkout_fields(
            ui,
            queue,
            FormKind::Enquiry,
            &enquiry.0,
            &LANDING_BRANCHES,
            |field| feedback.enquiry_problem(field),
        );
        if let Some(errors) = &feedback.enquiry {
            ui.label(
                egui::RichText::new(format!("Enquiry incomplete: {errors}"))
                    .size(theme::FONT_SMALL)
                    .color(theme::ERROR),
            );
        }
        ui.vertical_centered(|ui| {
            if primary_button(ui, "Submit").clicked() {
                queue.push(OrderAction::SubmitEnquiry);
            }
        });
    });
}
