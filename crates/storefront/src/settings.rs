use bevy::prelude::*;

/// Runtime switches for the storefront.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct StorefrontSettings {
    /// Render the built-in sample order when the review page is opened without
    /// a submitted order. When off, the page shows an explicit empty state.
    pub sample_order_fallback: bool,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            sample_order_fallback: true,
        }
    }
}
