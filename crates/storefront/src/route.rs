//! Client-side routes.
//!
//! Each page is a variant of the [`Route`] state. Systems gate themselves with
//! `in_state(Route::Menu)` etc., and page mount/unmount work is attached to
//! `OnEnter`/`OnExit`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Landing,
    Menu,
    Review,
    MenuPreview,
    Final,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Landing,
        Route::Menu,
        Route::Review,
        Route::MenuPreview,
        Route::Final,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Menu => "/menu",
            Route::Review => "/review",
            Route::MenuPreview => "/menu-preview",
            Route::Final => "/final",
        }
    }

    /// Resolve a URL path. A trailing slash is ignored; unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Like [`Route::from_path`] but falls back to the landing page.
    pub fn from_path_or_landing(path: &str) -> Route {
        Route::from_path(path).unwrap_or_else(|| {
            warn!("Unknown route '{}', showing landing page", path);
            Route::Landing
        })
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Menu => "Menu",
            Route::Review => "Review",
            Route::MenuPreview => "Menu Preview",
            Route::Final => "Order Placed",
        }
    }
}

/// Log every page change.
pub fn log_route_changes(route: Res<State<Route>>) {
    if route.is_changed() {
        info!("Route -> {} ({})", route.get().path(), route.get().title());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_back() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/review/"), Some(Route::Review));
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
    }

    #[test]
    fn test_unknown_path_falls_back_to_landing() {
        assert_eq!(Route::from_path("/checkout"), None);
        assert_eq!(Route::from_path_or_landing("/checkout"), Route::Landing);
    }
}
