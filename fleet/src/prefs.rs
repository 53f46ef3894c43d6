//! Persisted user preferences: theme, locale, and overview widget layout.
//!
//! Stored values are untrusted strings from browser storage with no schema
//! version. Anything malformed falls back to a default instead of failing.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde_json::Value;

use crate::layout::{WidgetId, WidgetLayout};

pub const THEME_KEY: &str = "theme";
pub const LOCALE_KEY: &str = "dashboard-locale";
pub const WIDGET_ORDER_KEY: &str = "overview-widget-order";
pub const WIDGET_EXPANDED_KEY: &str = "overview-widget-expanded";

// =============================================================================
// THEME
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value? {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Stored choice wins; otherwise follow the system color scheme.
#[must_use]
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    Theme::from_stored(stored).unwrap_or(if system_prefers_dark { Theme::Dark } else { Theme::Light })
}

// =============================================================================
// LOCALE
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ms,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
        }
    }

    /// Unknown or missing values read as English.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("ms") => Self::Ms,
            _ => Self::En,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ms,
            Self::Ms => Self::En,
        }
    }

    /// Short label for the switcher button.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ms => "MS",
        }
    }
}

// =============================================================================
// WIDGET LAYOUT
// =============================================================================

/// Known widget ids from a stored JSON array, in stored order. `None` when
/// the value is missing, not JSON, or not an array.
fn stored_ids(raw: Option<&str>) -> Option<Vec<WidgetId>> {
    let Value::Array(items) = serde_json::from_str::<Value>(raw?).unwrap_or(Value::Null) else {
        return None;
    };
    Some(items.iter().filter_map(Value::as_str).filter_map(WidgetId::from_name).collect())
}

/// Rebuilds the overview layout from its two storage entries. Unknown ids
/// are dropped, duplicates keep their first position, and ids missing from
/// the stored order are appended in default order.
#[must_use]
pub fn restore_layout(order: Option<&str>, expanded: Option<&str>) -> WidgetLayout {
    let order = stored_ids(order).unwrap_or_else(|| WidgetId::DEFAULT_ORDER.to_vec());
    WidgetLayout::new(order, stored_ids(expanded).unwrap_or_default())
}

/// JSON array of wire names, as persisted.
#[must_use]
pub fn encode_ids(ids: &[WidgetId]) -> String {
    let names: Vec<Value> = ids.iter().map(|id| Value::from(id.as_str())).collect();
    Value::Array(names).to_string()
}
