//! Slide-in navigation drawer painted above the page.
//!
//! The drawer's open/closing/closed state lives in
//! [`storefront::drawer::DrawerState`]; this module only paints it and turns
//! clicks into queued actions.

use bevy::prelude::*;
use bevy::window::RequestRedraw;
use bevy_egui::{egui, EguiContexts};
use storefront::drawer::{DrawerLink, DrawerState, FooterScroll};
use storefront::order_actions::{ActionQueue, OrderAction};

use crate::theme;

const PANEL_WIDTH: f32 = 427.0;
const PANEL_HEIGHT: f32 = 360.0;

/// Horizontal slide applied to the panel while it animates out.
pub fn slide_offset(closing_progress: f32, panel_width: f32) -> f32 {
    closing_progress.clamp(0.0, 1.0) * panel_width
}

pub fn drawer_overlay_ui(
    mut contexts: EguiContexts,
    drawer: Res<DrawerState>,
    mut queue: ResMut<ActionQueue>,
) {
    if !drawer.is_visible() {
        return;
    }

    let ctx = contexts.ctx_mut();
    let screen_rect = ctx.screen_rect();

    // Dim the page and swallow clicks that miss the panel.
    egui::Area::new(egui::Id::new("drawer_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(60),
            );
            let backdrop = ui.allocate_rect(screen_rect, egui::Sense::click());
            if backdrop.clicked() && !drawer.is_closing() {
                queue.push(OrderAction::CloseDrawer);
            }
        });

    let column_width = screen_rect.width().min(theme::CONTENT_WIDTH);
    let panel_width = column_width.min(PANEL_WIDTH);
    let column_right = screen_rect.center().x + column_width / 2.0;
    let left = column_right - panel_width
        + slide_offset(drawer.closing_progress(), panel_width);

    egui::Area::new(egui::Id::new("drawer_panel"))
        .fixed_pos(egui::pos2(left, screen_rect.min.y))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(theme::BRAND_RED)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(panel_width - 32.0);
                    ui.set_height(PANEL_HEIGHT - 32.0);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        let close = egui::Button::new(
                            egui::RichText::new("🗙").color(theme::TEXT_ON_RED),
                        )
                        .fill(egui::Color32::from_black_alpha(50))
                        .corner_radius(egui::CornerRadius::same(16));
                        if ui.add(close).clicked() {
                            queue.push(OrderAction::CloseDrawer);
                        }
                    });

                    ui.add_space(theme::SECTION_SPACING);
                    ui.vertical_centered(|ui| {
                        for link in DrawerLink::ALL {
                            let button = egui::Button::new(
                                egui::RichText::new(link.label())
                                    .size(theme::FONT_SUBHEADING)
                                    .color(theme::TEXT_ON_RED)
                                    .strong(),
                            )
                            .frame(false);
                            if ui.add(button).clicked() {
                                queue.push(OrderAction::FollowDrawerLink { link });
                            }
                            ui.add_space(theme::ITEM_SPACING * 2.0);
                        }
                    });
                });
        });
}

/// Keep frames coming while a drawer or footer timer is running, so the
/// reactive event loop does not stall the animation.
pub fn request_redraw_while_animating(
    drawer: Res<DrawerState>,
    scroll: Res<FooterScroll>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    if drawer.is_closing() || scroll.is_pending() {
        redraw.send(RequestRedraw);
    }
}
