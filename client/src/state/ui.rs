//! Local UI chrome state (theme, locale, map configuration).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `fleet` and `overview` so the header
//! and map view can change independently of dashboard data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use fleet::prefs::{Locale, Theme};

use crate::net::types::MapConfig;

/// Map tile configuration as seen by the map view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapKey {
    /// `/api/map/config` has not answered yet.
    #[default]
    Loading,
    /// Tiles are configured.
    Ready(String),
    /// No key, or the config request failed; the map renders its error panel.
    Unavailable(String),
}

/// Error panel text when the server has no tile key.
pub const MISSING_MAP_KEY: &str = "Map key is not configured. Set MAPTILER_KEY to enable the map.";

impl MapKey {
    /// Interpret a config response.
    #[must_use]
    pub fn from_config(config: &MapConfig) -> Self {
        match config.key() {
            Some(key) => Self::Ready(key.to_owned()),
            None => Self::Unavailable(MISSING_MAP_KEY.to_owned()),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Unavailable(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub locale: Locale,
    pub map_key: MapKey,
}
