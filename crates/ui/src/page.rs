//! Shared page chrome: phone-width column, header on top, footer at the end.

use bevy::prelude::*;
use bevy_egui::egui;
use storefront::drawer::ScrollToFooter;
use storefront::order_actions::ActionQueue;

use crate::{footer, header, theme};

/// Set when the footer should be scrolled into view on the next paint.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FooterScrollRequest(pub bool);

impl FooterScrollRequest {
    /// Returns the pending request and clears it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

pub fn receive_footer_scroll(
    mut events: EventReader<ScrollToFooter>,
    mut request: ResMut<FooterScrollRequest>,
) {
    if events.read().last().is_some() {
        request.0 = true;
    }
}

/// Left padding that centers a column of `content_width` in `available`.
pub fn column_offset(available: f32, content_width: f32) -> f32 {
    ((available - content_width) / 2.0).max(0.0)
}

/// Paint a full page: header, `body`, footer.
pub fn show_page(
    ctx: &egui::Context,
    queue: &mut ActionQueue,
    footer_scroll: &mut FooterScrollRequest,
    body: impl FnOnce(&mut egui::Ui, &mut ActionQueue),
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::PAGE_BG))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width().min(theme::CONTENT_WIDTH);
                    let offset = column_offset(ui.available_width(), width);
                    ui.horizontal_top(|ui| {
                        ui.add_space(offset);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            ui.spacing_mut().item_spacing.x = 0.0;
                            header::header(ui, queue);
                            body(ui, queue);
                            footer::footer(ui, queue, footer_scroll.take());
                        });
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_centered_on_wide_screens() {
        assert_eq!(column_offset(1030.0, 430.0), 300.0);
    }

    #[test]
    fn test_column_flush_on_narrow_screens() {
        assert_eq!(column_offset(360.0, 430.0), 0.0);
    }

    #[test]
    fn test_footer_request_taken_once() {
        let mut request = FooterScrollRequest(true);
        assert!(request.take());
        assert!(!request.take());
    }
}
