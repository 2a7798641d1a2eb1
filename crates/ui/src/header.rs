use bevy_egui::egui;
use storefront::order_actions::{ActionQueue, OrderAction};

use crate::theme;
use crate::ui_widgets::red_band;

/// Brand bar with the drawer toggle.
pub fn header(ui: &mut egui::Ui, queue: &mut ActionQueue) {
    red_band(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("En")
                    .size(theme::FONT_BODY)
                    .color(theme::GOLDENROD),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Biriyani World")
                    .size(theme::FONT_HEADING)
                    .color(theme::GOLDENROD)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let menu_button = egui::Button::new(
                    egui::RichText::new("☰")
                        .size(theme::FONT_HEADING)
                        .color(theme::GOLDENROD),
                )
                .frame(false);
                if ui.add(menu_button).on_hover_text("Menu").clicked() {
                    queue.push(OrderAction::OpenDrawer);
                }
            });
        });
    });
}
