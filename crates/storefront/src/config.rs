use std::time::Duration;

/// Flat delivery charge added to every order, in whole rupees.
pub const DELIVERY_CHARGE_RUPEES: u64 = 100;

/// Length of the drawer's slide-out animation before it unmounts.
pub const DRAWER_CLOSE_ANIMATION_MS: u64 = 300;

/// Delay between closing the drawer and scrolling to the footer ("Contact Us").
pub const FOOTER_SCROLL_DELAY_MS: u64 = 300;

/// Number of executed actions retained by the result log.
pub const ACTION_LOG_CAPACITY: usize = 64;

/// Logical window size; the storefront is laid out as a phone-width column.
pub const WINDOW_WIDTH: f32 = 430.0;
pub const WINDOW_HEIGHT: f32 = 860.0;

pub const fn drawer_close_animation() -> Duration {
    Duration::from_millis(DRAWER_CLOSE_ANIMATION_MS)
}

pub const fn footer_scroll_delay() -> Duration {
    Duration::from_millis(FOOTER_SCROLL_DELAY_MS)
}
