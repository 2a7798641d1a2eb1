use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use storefront::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use storefront::route::Route;

#[cfg(not(target_arch = "wasm32"))]
mod cli;
#[cfg(target_arch = "wasm32")]
mod web_route;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Biriyani World".to_string(),
            resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
            present_mode: PresentMode::AutoVsync,
            #[cfg(target_arch = "wasm32")]
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_state(starting_route())
    .add_plugins((storefront::StorefrontPlugin, ui::UiPlugin));

    #[cfg(target_arch = "wasm32")]
    app.add_systems(
        Update,
        (
            web_route::follow_location.before(storefront::StorefrontSet::Actions),
            web_route::push_history.after(storefront::StorefrontSet::Timers),
        ),
    );

    app.run();
}

#[cfg(not(target_arch = "wasm32"))]
fn starting_route() -> Route {
    use clap::Parser;

    let route = cli::Cli::parse().initial_route();
    info!("Starting on {} ({})", route.title(), route.path());
    route
}

#[cfg(target_arch = "wasm32")]
fn starting_route() -> Route {
    web_route::initial_route()
}
