//! Navigation and chrome strings in the two supported locales.
//!
//! Only the dashboard chrome is translated; data labels come from the
//! engine's English tables.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use fleet::prefs::{self, Locale};

use super::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    Overview,
    Assets,
    Map,
    Alerts,
    Geofences,
    Logout,
    SignIn,
    Username,
    Password,
    ResetLayout,
    Loading,
}

impl Text {
    pub const ALL: [Self; 11] = [
        Self::Overview,
        Self::Assets,
        Self::Map,
        Self::Alerts,
        Self::Geofences,
        Self::Logout,
        Self::SignIn,
        Self::Username,
        Self::Password,
        Self::ResetLayout,
        Self::Loading,
    ];
}

#[must_use]
pub fn t(locale: Locale, text: Text) -> &'static str {
    match locale {
        Locale::En => match text {
            Text::Overview => "Overview",
            Text::Assets => "Assets",
            Text::Map => "Map",
            Text::Alerts => "Alerts",
            Text::Geofences => "Geofences",
            Text::Logout => "Logout",
            Text::SignIn => "Sign in",
            Text::Username => "Username",
            Text::Password => "Password",
            Text::ResetLayout => "Reset layout",
            Text::Loading => "Loading...",
        },
        Locale::Ms => match text {
            Text::Overview => "Gambaran",
            Text::Assets => "Aset",
            Text::Map => "Peta",
            Text::Alerts => "Amaran",
            Text::Geofences => "Geopagar",
            Text::Logout => "Log keluar",
            Text::SignIn => "Log masuk",
            Text::Username => "Nama pengguna",
            Text::Password => "Kata laluan",
            Text::ResetLayout => "Set semula susun atur",
            Text::Loading => "Memuatkan...",
        },
    }
}

/// The stored locale, English when absent.
pub fn read_preference() -> Locale {
    Locale::from_stored(storage::load(prefs::LOCALE_KEY).as_deref())
}

/// Set `<html lang>` to match the locale.
pub fn apply(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("lang", locale.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}

/// Switch locale, apply it, and persist the choice.
pub fn toggle(current: Locale) -> Locale {
    let next = current.toggled();
    apply(next);
    storage::save(prefs::LOCALE_KEY, next.as_str());
    next
}
