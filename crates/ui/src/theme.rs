use bevy_egui::{egui, EguiContexts};

// Brand palette
pub const BRAND_RED: egui::Color32 = egui::Color32::from_rgb(139, 0, 0);
pub const BRAND_RED_DARK: egui::Color32 = egui::Color32::from_rgb(90, 14, 38);
pub const GOLDENROD: egui::Color32 = egui::Color32::from_rgb(241, 185, 59);
pub const AMBER: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const CARD_BG: egui::Color32 = egui::Color32::WHITE;
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 100, 100);
pub const TEXT_ON_RED: egui::Color32 = egui::Color32::WHITE;
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(178, 34, 34);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(180, 110, 0);

// Typography
pub const FONT_TITLE: f32 = 30.0;
pub const FONT_HEADING: f32 = 22.0;
pub const FONT_SUBHEADING: f32 = 17.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.0;

// Spacing
pub const SECTION_SPACING: f32 = 24.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CARD_CORNER_RADIUS: u8 = 16;
pub const WIDGET_CORNER_RADIUS: u8 = 8;

/// Width of the phone-sized content column every page is laid out in.
pub const CONTENT_WIDTH: f32 = 430.0;

pub fn apply_storefront_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let inactive = egui::Color32::from_rgb(245, 245, 245);
    let hover = egui::Color32::from_rgb(254, 226, 226);

    style.visuals.widgets.noninteractive.bg_fill = CARD_BG;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = GOLDENROD;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = GOLDENROD;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);

    style.visuals.window_fill = CARD_BG;
    style.visuals.panel_fill = PAGE_BG;
    style.visuals.extreme_bg_color = egui::Color32::WHITE;

    style.visuals.selection.bg_fill = GOLDENROD;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, BRAND_RED);

    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    style.visuals.window_corner_radius = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(ITEM_SPACING, ITEM_SPACING);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}
