//! Navigation drawer state machine.
//!
//! ```text
//!   Closed --open--> Open --close--> Closing(300ms) --timer--> Closed (+DrawerClosed)
//!                     |                  |
//!                     +---link/close_now-+--------------------> Closed (+DrawerClosed)
//! ```
//!
//! The drawer is owned as an explicit resource; pages read it to decide
//! whether to paint the overlay and which variant (sliding in or closing).
//! A route change tears the drawer down and cancels any pending timer
//! without emitting a close event.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{drawer_close_animation, footer_scroll_delay};

#[derive(Resource, Debug, Clone, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
    Closing {
        timer: Timer,
    },
}

/// Fired once each time the drawer finishes closing.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerClosed;

/// Entries listed inside the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawerLink {
    Home,
    Menu,
    ContactUs,
}

impl DrawerLink {
    pub const ALL: [DrawerLink; 3] = [DrawerLink::Home, DrawerLink::Menu, DrawerLink::ContactUs];

    pub fn label(self) -> &'static str {
        match self {
            DrawerLink::Home => "Home",
            DrawerLink::Menu => "Menu",
            DrawerLink::ContactUs => "Contact Us",
        }
    }
}

impl DrawerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, DrawerState::Closed)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, DrawerState::Closing { .. })
    }

    /// Closed -> Open. Ignored while open or already closing.
    pub fn open(&mut self) -> bool {
        if matches!(self, DrawerState::Closed) {
            *self = DrawerState::Open;
            true
        } else {
            false
        }
    }

    /// Open -> Closing. A repeated request while closing is ignored so the
    /// close event still fires exactly once.
    pub fn request_close(&mut self) -> bool {
        if matches!(self, DrawerState::Open) {
            *self = DrawerState::Closing {
                timer: Timer::new(drawer_close_animation(), TimerMode::Once),
            };
            true
        } else {
            false
        }
    }

    /// Close without the animation. Returns `true` when a close event is due.
    pub fn close_now(&mut self) -> bool {
        if self.is_visible() {
            *self = DrawerState::Closed;
            true
        } else {
            false
        }
    }

    /// Advance the closing animation. Returns `true` on the tick it completes.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let DrawerState::Closing { timer } = self else {
            return false;
        };
        timer.tick(delta);
        if timer.finished() {
            *self = DrawerState::Closed;
            true
        } else {
            false
        }
    }

    /// Drop back to Closed without emitting anything. Used on page teardown.
    pub fn cancel(&mut self) {
        if let DrawerState::Closing { timer } = self {
            debug!(
                "Drawer teardown cancelled closing timer with {:?} remaining",
                timer.remaining()
            );
        }
        *self = DrawerState::Closed;
    }

    /// 0.0 when fully shown, 1.0 when the closing animation is done.
    pub fn closing_progress(&self) -> f32 {
        match self {
            DrawerState::Closing { timer } => timer.fraction(),
            _ => 0.0,
        }
    }
}

/// Deferred "scroll to footer" requested by the Contact Us link.
#[derive(Resource, Debug, Clone, Default)]
pub struct FooterScroll(pub Option<Timer>);

impl FooterScroll {
    pub fn schedule(&mut self) {
        self.0 = Some(Timer::new(footer_scroll_delay(), TimerMode::Once));
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.0.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if timer.finished() {
            self.0 = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.0 = None;
    }
}

/// Fired when the UI should bring the footer into view.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToFooter;

pub fn tick_drawer(
    time: Res<Time>,
    mut drawer: ResMut<DrawerState>,
    mut closed: EventWriter<DrawerClosed>,
) {
    if !drawer.is_closing() {
        return;
    }
    if drawer.tick(time.delta()) {
        closed.send(DrawerClosed);
    }
}

pub fn tick_footer_scroll(
    time: Res<Time>,
    mut scroll: ResMut<FooterScroll>,
    mut events: EventWriter<ScrollToFooter>,
) {
    if !scroll.is_pending() {
        return;
    }
    if scroll.tick(time.delta()) {
        events.send(ScrollToFooter);
    }
}

/// Runs on every page exit.
pub fn teardown_overlays(mut drawer: ResMut<DrawerState>, mut scroll: ResMut<FooterScroll>) {
    drawer.cancel();
    scroll.cancel();
}
