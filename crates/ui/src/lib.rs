use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use storefront::route::Route;
use storefront::StorefrontSet;

pub mod drawer_ui;
pub mod final_page;
pub mod footer;
pub mod header;
pub mod landing_page;
pub mod menu_page;
pub mod menu_preview_page;
pub mod page;
pub mod review_page;
pub mod theme;
pub mod ui_widgets;

/// Paints every page with egui. Page systems only read storefront state and
/// queue actions, so they run before the executor each frame.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<page::FooterScrollRequest>()
            .add_systems(Startup, theme::apply_storefront_theme)
            .add_systems(
                Update,
                (
                    page::receive_footer_scroll,
                    landing_page::landing_page_ui.run_if(in_state(Route::Landing)),
                    menu_page::menu_page_ui.run_if(in_state(Route::Menu)),
                    review_page::review_page_ui.run_if(in_state(Route::Review)),
                    menu_preview_page::menu_preview_page_ui
                        .run_if(in_state(Route::MenuPreview)),
                    final_page::final_page_ui.run_if(in_state(Route::Final)),
                    drawer_ui::drawer_overlay_ui,
                )
                    .chain()
                    .before(StorefrontSet::Actions),
            )
            .add_systems(
                Update,
                drawer_ui::request_redraw_while_animating.after(StorefrontSet::Timers),
            );
    }
}
