//! Top navigation bar with theme, locale, and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `DashboardFrame` on every authenticated route.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use fleet::prefs::Theme;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::i18n::{self, Text, t};
use crate::util::theme;

/// Primary navigation entries.
pub const NAV: [(Text, &str); 5] = [
    (Text::Overview, "/"),
    (Text::Assets, "/assets"),
    (Text::Map, "/map"),
    (Text::Alerts, "/alerts"),
    (Text::Geofences, "/geofences"),
];

/// Glyph for the theme button: the theme a click switches to.
#[must_use]
pub fn theme_icon(current: Theme) -> &'static str {
    if current.is_dark() { "☀" } else { "☾" }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let locale = move || ui.get().locale;

    let on_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };
    let on_locale = move |_| {
        let next = i18n::toggle(ui.get_untracked().locale);
        ui.update(|u| u.locale = next);
    };
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.resolve(None));
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
    };

    view! {
        <header class="navbar bg-base-100 border-b border-base-300 px-4">
            <div class="flex-1 gap-2">
                <span class="text-lg font-bold">"🚚 Fleet Dashboard"</span>
                <nav class="menu menu-horizontal px-2">
                    {NAV
                        .into_iter()
                        .map(|(text, href)| {
                            view! {
                                <li>
                                    <A href=href>{move || t(locale(), text)}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost btn-sm" on:click=on_locale title="Switch language">
                    {move || locale().badge()}
                </button>
                <button class="btn btn-ghost btn-sm" on:click=on_theme title="Toggle theme">
                    {move || theme_icon(ui.get().theme)}
                </button>
                <span class="text-sm opacity-70">
                    {move || auth.get().email().map(str::to_owned).unwrap_or_default()}
                </span>
                <button class="btn btn-outline btn-sm" on:click=on_logout>
                    {move || t(locale(), Text::Logout)}
                </button>
            </div>
        </header>
    }
}
