use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use storefront::catalog::MenuCatalog;
use storefront::order_actions::{ActionQueue, OrderAction};
use storefront::route::Route;

use crate::page::{show_page, FooterScrollRequest};
use crate::theme;
use crate::ui_widgets::{caption, card, primary_button, themed_heading, themed_subheading};

/// Read-only menu shown after an enquiry is sent from the landing page.
pub fn menu_preview_page_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut footer_scroll: ResMut<FooterScrollRequest>,
    catalog: Res<MenuCatalog>,
) {
    let ctx = contexts.ctx_mut();
    show_page(ctx, &mut queue, &mut footer_scroll, |ui, queue| {
        ui.add_space(theme::SECTION_SPACING);
        ui.vertical_centered(|ui| {
            themed_heading(ui, "Our Menu");
            caption(ui, "Thanks for reaching out! Here is what we cook.");
        });
        ui.add_space(theme::ITEM_SPACING);

        for item in catalog.items() {
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    themed_subheading(ui, &item.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(item.unit_price.price())
                                .size(theme::FONT_BODY)
                                .strong(),
                        );
                    });
                });
                caption(ui, &format!("Min. order {}", item.min_order_qty));
                ui.label(
                    egui::RichText::new(&item.description)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
            });
            ui.add_space(theme::ITEM_SPACING);
        }

        ui.add_space(theme::ITEM_SPACING);
        ui.vertical_centered(|ui| {
            if primary_button(ui, "Order Now").clicked() {
                queue.push(OrderAction::Navigate { route: Route::Menu });
            }
        });
    });
}
