//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use fleet::prefs::{WIDGET_EXPANDED_KEY, WIDGET_ORDER_KEY};

use crate::pages::{
    alerts::AlertsPage, asset_detail::AssetDetailPage, assets::AssetsPage, geofences::GeofencesPage, login::LoginPage,
    map::MapPage, not_found::NotFoundPage, overview::OverviewPage,
};
use crate::state::{auth::AuthState, fleet::FleetState, overview::OverviewState, ui::UiState};
use crate::util::{clock, i18n, storage, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let fleet = RwSignal::new(FleetState::default());
    let overview = RwSignal::new(OverviewState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(fleet);
    provide_context(overview);
    provide_context(ui);

    // Effects only run in the browser, so stored preferences, the synthetic
    // fleet, and the session lookup never touch the SSR pass.
    Effect::new(move || {
        let theme_pref = theme::read_preference();
        theme::apply(theme_pref);
        let locale = i18n::read_preference();
        i18n::apply(locale);
        ui.update(|u| {
            u.theme = theme_pref;
            u.locale = locale;
        });

        overview.set(OverviewState::restored(
            storage::load(WIDGET_ORDER_KEY).as_deref(),
            storage::load(WIDGET_EXPANDED_KEY).as_deref(),
        ));
        fleet.set(FleetState::seeded(clock::now_ms()));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| a.resolve(user));
            });
            leptos::task::spawn_local(async move {
                let key = match crate::net::api::fetch_map_config().await {
                    Ok(config) => crate::state::ui::MapKey::from_config(&config),
                    Err(e) => {
                        log::warn!("map config unavailable: {e}");
                        crate::state::ui::MapKey::Unavailable(e.to_string())
                    }
                };
                ui.update(|u| u.map_key = key);
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fleet-dashboard.css"/>
        <Title text="Fleet Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=OverviewPage/>
                <Route path=StaticSegment("overview") view=OverviewPage/>
                <Route path=StaticSegment("assets") view=AssetsPage/>
                <Route path=(StaticSegment("assets"), ParamSegment("id")) view=AssetDetailPage/>
                <Route path=StaticSegment("map") view=MapPage/>
                <Route path=StaticSegment("alerts") view=AlertsPage/>
                <Route path=StaticSegment("geofences") view=GeofencesPage/>
            </Routes>
        </Router>
    }
}
