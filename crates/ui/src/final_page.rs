use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use storefront::order_actions::ActionQueue;

use crate::page::{show_page, FooterScrollRequest};
use crate::theme;

pub fn final_page_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut footer_scroll: ResMut<FooterScrollRequest>,
) {
    let ctx = contexts.ctx_mut();
    show_page(ctx, &mut queue, &mut footer_scroll, |ui, _queue| {
        egui::Frame::NONE
            .fill(theme::CARD_BG)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    for line in ["One step closer to", "biriyani bliss!"] {
                        ui.label(
                            egui::RichText::new(line)
                                .size(theme::FONT_TITLE)
                                .color(theme::BRAND_RED)
                                .strong(),
                        );
                    }
                    ui.add_space(theme::SECTION_SPACING);
                    for line in ["We'll give you a quick call soon", "stay tuned for the feast!"] {
                        ui.label(
                            egui::RichText::new(line)
                                .size(theme::FONT_SUBHEADING)
                                .color(theme::TEXT),
                        );
                    }
                });
            });
    });
}
