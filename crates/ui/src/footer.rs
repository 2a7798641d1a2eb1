use bevy_egui::egui;
use storefront::order_actions::{ActionQueue, OrderAction};
use storefront::route::Route;

use crate::theme;
use crate::ui_widgets::red_band;

const PHONE_NUMBER: &str = "7451212545";

/// Quick links, brand and contact details. `scroll_into_view` brings the
/// footer to the top of the viewport (the drawer's "Contact Us" target).
pub fn footer(ui: &mut egui::Ui, queue: &mut ActionQueue, scroll_into_view: bool) {
    ui.add_space(theme::SECTION_SPACING);
    let response = egui::Frame::NONE
        .show(ui, |ui| {
            red_band(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Quick Links")
                            .size(theme::FONT_TITLE)
                            .color(theme::TEXT_ON_RED)
                            .strong(),
                    );
                    ui.add_space(theme::ITEM_SPACING);
                    if footer_link(ui, "Home").clicked() {
                        queue.push(OrderAction::Navigate {
                            route: Route::Landing,
                        });
                    }
                    if footer_link(ui, "Menu").clicked() {
                        queue.push(OrderAction::Navigate { route: Route::Menu });
                    }
                    ui.label(
                        egui::RichText::new("Contact Us")
                            .size(theme::FONT_SUBHEADING)
                            .color(theme::TEXT_ON_RED),
                    );

                    ui.add_space(theme::SECTION_SPACING);
                    ui.label(
                        egui::RichText::new("Biriyani World")
                            .size(theme::FONT_HEADING)
                            .color(theme::GOLDENROD)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(format!("Phone No: {PHONE_NUMBER}"))
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_ON_RED),
                    );
                    ui.add_space(theme::ITEM_SPACING);
                    ui.label(
                        egui::RichText::new("© Biriyani Culture all rights reserved")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_ON_RED),
                    );
                });
            });
        })
        .response;

    if scroll_into_view {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
}

fn footer_link(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .size(theme::FONT_SUBHEADING)
                .color(theme::TEXT_ON_RED),
        )
        .frame(false),
    )
}
