//! Asset detail page: one asset's info, route, event history, speed chart,
//! and recorded trail.

#[cfg(test)]
#[path = "asset_detail_test.rs"]
mod asset_detail_test;

use fleet::asset::{Asset, Event, LocationHistory, Timestamp};
use fleet::insights::format_relative_time;
use fleet::seed;
use fleet::simulate::haversine_m;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::speed_chart::SpeedChart;
use crate::state::fleet::FleetState;

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Eight-point compass label for a heading in degrees.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compass_point(heading: f64) -> &'static str {
    let sector = ((heading.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % COMPASS.len();
    COMPASS[sector]
}

/// Route progress clamped to a whole percentage.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(progress: f64) -> u8 {
    progress.clamp(0.0, 100.0).round() as u8
}

/// Path length of a recorded trail in kilometres.
#[must_use]
pub fn trail_distance_km(history: &LocationHistory) -> f64 {
    history
        .locations
        .windows(2)
        .map(|pair| haversine_m(pair[0].coordinates(), pair[1].coordinates()))
        .sum::<f64>()
        / 1000.0
}

#[component]
pub fn AssetDetailPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let params = use_params_map();
    let asset_id = move || params.read().get("id").unwrap_or_default();

    let asset = Memo::new(move |_| {
        let id = asset_id();
        fleet.with(|f| f.asset(&id).cloned())
    });

    view! {
        <DashboardFrame>
            <div class="mb-4">
                <A href="/assets" attr:class="btn btn-ghost btn-sm">"← All assets"</A>
            </div>
            {move || match asset.get() {
                Some(asset) => view! { <AssetDetail asset/> }.into_any(),
                None => {
                    let loaded = fleet.with(|f| f.loaded);
                    view! {
                        <div class="alert">
                            {if loaded {
                                format!("No asset with id {}", asset_id())
                            } else {
                                "Loading fleet…".to_owned()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </DashboardFrame>
    }
}

#[component]
fn AssetDetail(asset: Asset) -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let now = fleet.with_untracked(|f| f.clock);
    let id = asset.id.clone();
    let events = {
        let id = id.clone();
        Memo::new(move |_| fleet.with(|f| f.events_for(&id).into_iter().cloned().collect::<Vec<Event>>()))
    };
    let samples = seed::speed_series(&id, now - now.rem_euclid(seed::SAMPLE_INTERVAL_MS));
    let trail = seed::location_history(&id, now);

    view! {
        <div class="mb-4 flex items-center gap-3">
            <span class="text-3xl">{asset.kind.icon()}</span>
            <div>
                <h1 class="text-2xl font-bold">{asset.name.clone()}</h1>
                <div class="text-sm opacity-60">{format!("{} · {}", asset.id, asset.kind.label())}</div>
            </div>
            <span class=format!("badge {}", asset.status.badge_class())>{asset.status.label()}</span>
        </div>
        <div class="grid grid-cols-1 gap-4 lg:grid-cols-2">
            <InfoCard asset=asset.clone() now/>
            <RouteCard asset/>
            <div class="card bg-base-100 shadow lg:col-span-2">
                <div class="card-body">
                    <h2 class="card-title">"Speed"</h2>
                    <SpeedChart samples/>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Events"</h2>
                    <Show
                        when=move || events.with(|e| !e.is_empty())
                        fallback=|| view! { <p class="opacity-60">"No events recorded"</p> }
                    >
                        <ul class="space-y-2">
                            {move || {
                                events
                                    .get()
                                    .into_iter()
                                    .map(|e| {
                                        view! {
                                            <li class="flex gap-2 text-sm">
                                                <span>{e.kind.icon()}</span>
                                                <span class="flex-1">{e.description.clone()}</span>
                                                <span class="opacity-60">
                                                    {format_relative_time(Some(e.timestamp), now)}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
            </div>
            <TrailCard trail/>
        </div>
    }
}

#[component]
fn InfoCard(asset: Asset, now: Timestamp) -> impl IntoView {
    let location = asset.current_location.clone();
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Details"</h2>
                <dl class="grid grid-cols-2 gap-y-1 text-sm">
                    <dt class="opacity-60">"Driver"</dt>
                    <dd>{asset.driver.as_ref().map_or_else(|| "Unassigned".to_owned(), |d| d.name.clone())}</dd>
                    <dt class="opacity-60">"Phone"</dt>
                    <dd>{asset.driver.as_ref().map_or_else(|| "-".to_owned(), |d| d.phone.clone())}</dd>
                    <dt class="opacity-60">"Location"</dt>
                    <dd>{location.as_ref().map_or_else(|| "Unknown".to_owned(), |l| l.address.clone())}</dd>
                    <dt class="opacity-60">"Speed"</dt>
                    <dd>
                        {location.as_ref().map_or_else(
                            || "-".to_owned(),
                            |l| format!("{:.1} km/h {}", l.speed, compass_point(l.heading)),
                        )}
                    </dd>
                    <dt class="opacity-60">"Last update"</dt>
                    <dd>{format_relative_time(Some(asset.last_update), now)}</dd>
                </dl>
            </div>
        </div>
    }
}

#[component]
fn RouteCard(asset: Asset) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Route"</h2>
                {match asset.route {
                    Some(route) => {
                        let pct = progress_percent(route.progress);
                        view! {
                            <div class="text-sm">{format!("{} → {}", route.origin, route.destination)}</div>
                            <progress class="progress progress-primary w-full" value=pct.to_string() max="100"></progress>
                            <div class="text-xs opacity-60">{format!("{pct}% complete")}</div>
                        }
                            .into_any()
                    }
                    None => view! { <p class="opacity-60">"No active route"</p> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TrailCard(trail: Option<LocationHistory>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Trail"</h2>
                {match trail {
                    Some(history) => {
                        let distance = trail_distance_km(&history);
                        let points = history.locations.len();
                        let start = history.locations.first().map(|l| l.address.clone()).unwrap_or_default();
                        let end = history.locations.last().map(|l| l.address.clone()).unwrap_or_default();
                        view! {
                            <div class="text-sm">{format!("{points} GPS points · {distance:.1} km")}</div>
                            <div class="text-xs opacity-60">{format!("{start} → {end}")}</div>
                        }
                            .into_any()
                    }
                    None => view! { <p class="opacity-60">"No recorded trail"</p> }.into_any(),
                }}
            </div>
        </div>
    }
}
