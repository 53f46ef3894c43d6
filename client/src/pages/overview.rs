//! Overview page: the user-arranged widget grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Widget order and spans come from
//! `fleet::layout`; cards are keyed by widget id so a reorder moves existing
//! DOM nodes and an in-flight drag survives re-layout.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use fleet::asset::{Asset, AssetStatus, SpeedSample, Timestamp};
use fleet::insights::{self, ActionLabel, OperationalSnapshot, format_relative_time};
use fleet::layout::{LayoutItem, WidgetId};
use fleet::seed;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::map_view::MapView;
use crate::components::speed_chart::SpeedChart;
use crate::components::stats_panel::StatsPanel;
use crate::components::widget_card::{WidgetCard, install_drag_teardown, persist};
use crate::state::fleet::FleetState;
use crate::state::overview::{OverviewState, Persist};
use crate::state::ui::UiState;
use crate::util::i18n::{Text, t};

/// Mean speed across active assets at each sample slot of the 24h series.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fleet_speed_trend(assets: &[Asset], now: Timestamp) -> Vec<SpeedSample> {
    let series: Vec<Vec<SpeedSample>> = assets
        .iter()
        .filter(|a| a.status == AssetStatus::Active)
        .map(|a| seed::speed_series(&a.id, now))
        .collect();
    let Some(first) = series.first() else {
        return Vec::new();
    };
    first
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let total: f64 = series.iter().filter_map(|s| s.get(i)).map(|s| s.speed).sum();
            SpeedSample { timestamp: slot.timestamp, speed: (total / series.len() as f64 * 10.0).round() / 10.0 }
        })
        .collect()
}

/// Span of `id` in the current layout.
#[must_use]
pub fn span_of(items: &[LayoutItem], id: WidgetId) -> u8 {
    items.iter().find(|i| i.id == id).map_or(1, |i| i.span)
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let overview = expect_context::<RwSignal<OverviewState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let items = Memo::new(move |_| overview.with(OverviewState::items));
    install_drag_teardown(overview);

    let on_reset = move |_| {
        overview.update(OverviewState::reset);
        overview.with_untracked(|s| {
            persist(s, Persist::Order);
            persist(s, Persist::Expanded);
        });
    };

    view! {
        <DashboardFrame>
            <div class="mb-4 flex items-center justify-between">
                <h1 class="text-2xl font-bold">{move || t(ui.get().locale, Text::Overview)}</h1>
                <button class="btn btn-ghost btn-sm" on:click=on_reset>
                    {move || t(ui.get().locale, Text::ResetLayout)}
                </button>
            </div>
            <div class="grid grid-cols-1 gap-4 lg:grid-cols-4">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let span = Signal::derive(move || span_of(&items.get(), id));
                        view! { <WidgetCard id span>{widget_body(id)}</WidgetCard> }
                    }
                />
            </div>
        </DashboardFrame>
    }
}

fn widget_body(id: WidgetId) -> AnyView {
    match id {
        WidgetId::Stats => view! { <StatsPanel/> }.into_any(),
        WidgetId::Speed => view! { <SpeedWidget/> }.into_any(),
        WidgetId::Action => view! { <ActionWidget/> }.into_any(),
        WidgetId::Routes => view! { <RoutesWidget/> }.into_any(),
        WidgetId::Map => view! { <MapView/> }.into_any(),
        WidgetId::Snapshot => view! { <SnapshotWidget/> }.into_any(),
        WidgetId::Events => view! { <EventsWidget/> }.into_any(),
        WidgetId::Links => view! { <LinksWidget/> }.into_any(),
    }
}

#[component]
fn SpeedWidget() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    // Series are seeded by the load time, not the tick clock, so they stay put.
    let samples = Memo::new(move |_| {
        fleet.with(|f| if f.loaded { fleet_speed_trend(&f.assets, f.clock - f.clock % seed::SAMPLE_INTERVAL_MS) } else { Vec::new() })
    });
    view! { {move || view! { <SpeedChart samples=samples.get()/> }} }
}

#[component]
fn ActionWidget() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let rows = move || {
        fleet.with(|f| {
            insights::action_required(&f.assets, f.clock)
                .into_iter()
                .map(|a| (a.id.clone(), a.name.clone(), ActionLabel::for_asset(a), format_relative_time(Some(a.last_update), f.clock)))
                .collect::<Vec<_>>()
        })
    };
    view! {
        <ul class="space-y-2">
            {move || {
                let rows = rows();
                if rows.is_empty() {
                    return view! { <li class="text-sm opacity-60">"Nothing needs attention"</li> }.into_any();
                }
                rows.into_iter()
                    .map(|(id, name, label, when)| {
                        view! {
                            <li class="flex items-center justify-between gap-2">
                                <A href=format!("/assets/{id}")>
                                    <span class="font-medium">{name}</span>
                                </A>
                                <span class="text-xs opacity-60">{when}</span>
                                <span class=format!("badge {}", label.badge_class())>{label.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </ul>
    }
}

#[component]
fn RoutesWidget() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let rows = move || {
        fleet.with(|f| {
            insights::route_progress(&f.assets)
                .into_iter()
                .filter_map(|a| a.route.as_ref().map(|r| (a.name.clone(), r.origin.clone(), r.destination.clone(), r.progress)))
                .collect::<Vec<_>>()
        })
    };
    view! {
        <ul class="space-y-3">
            {move || {
                rows()
                    .into_iter()
                    .map(|(name, origin, destination, progress)| {
                        view! {
                            <li>
                                <div class="flex justify-between text-sm">
                                    <span class="font-medium">{name}</span>
                                    <span>{format!("{progress:.0}%")}</span>
                                </div>
                                <div class="text-xs opacity-60">{format!("{origin} → {destination}")}</div>
                                <progress class="progress progress-primary w-full" value=progress.to_string() max="100"></progress>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn SnapshotWidget() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let snap = Memo::new(move |_| fleet.with(|f| OperationalSnapshot::new(&f.assets, &f.events)));
    view! {
        <dl class="grid grid-cols-2 gap-2 text-sm">
            <dt class="opacity-60">"Moving"</dt>
            <dd>{move || format!("{} / {}", snap.get().moving, snap.get().total)}</dd>
            <dt class="opacity-60">"Maintenance"</dt>
            <dd>{move || snap.get().maintenance}</dd>
            <dt class="opacity-60">"Inactive"</dt>
            <dd>{move || snap.get().inactive}</dd>
            <dt class="opacity-60">"Average speed"</dt>
            <dd>{move || format!("{:.1} km/h", snap.get().average_speed)}</dd>
            <dt class="opacity-60">"Geofence activity"</dt>
            <dd>{move || snap.get().geofence_activity}</dd>
        </dl>
    }
}

#[component]
fn EventsWidget() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let rows = move || {
        fleet.with(|f| {
            insights::recent_events(&f.events)
                .into_iter()
                .map(|e| (e.id.clone(), e.kind, e.description.clone(), format_relative_time(Some(e.timestamp), f.clock)))
                .collect::<Vec<_>>()
        })
    };
    view! {
        <ul class="space-y-2 text-sm">
            <For
                each=rows
                key=|(id, _, _, when)| (id.clone(), when.clone())
                children=|(_, kind, description, when)| {
                    view! {
                        <li class="flex gap-2">
                            <span>{kind.icon()}</span>
                            <span class="grow">{description}</span>
                            <span class="text-xs opacity-60">{when}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
fn LinksWidget() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <A href="/assets">"📋 Browse all assets"</A>
            <A href="/map">"🗺️ Open live map"</A>
            <A href="/alerts">"🔔 Review alerts"</A>
        </div>
    }
}
