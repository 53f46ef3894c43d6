//! Map page: live marker layer, the asset list, and selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! While this page is mounted a browser timer advances the simulation every
//! `TICK_INTERVAL`. The loop checks an alive flag cleared on unmount, so
//! navigating away stops the fleet from moving.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::time::Duration;

use fleet::asset::Asset;
use fleet::markers::marker_color;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::map_view::MapView;
use crate::state::fleet::FleetState;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, t};

pub const TICK_INTERVAL: Duration = Duration::from_secs(5);

/// "N of M assets on map".
#[must_use]
pub fn placed_caption(assets: &[Asset]) -> String {
    let placed = assets.iter().filter(|a| a.current_location.is_some()).count();
    format!("{placed} of {} assets on map", assets.len())
}

/// List order: moving assets first, then by id.
#[must_use]
pub fn list_order(assets: &[Asset]) -> Vec<&Asset> {
    let mut rows: Vec<&Asset> = assets.iter().collect();
    rows.sort_by(|a, b| b.is_moving().cmp(&a.is_moving()).then_with(|| a.id.cmp(&b.id)));
    rows
}

#[component]
pub fn MapPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(TICK_INTERVAL).await;
                if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let now = crate::util::clock::now_ms();
                if let Some(fired) = fleet.try_update(|f| f.advance(now))
                    && fired > 0
                {
                    log::info!("simulation tick fired {fired} geofence events");
                }
            }
        });
        on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let rows = Memo::new(move |_| fleet.with(|f| list_order(&f.assets).into_iter().cloned().collect::<Vec<_>>()));
    let selected = move || fleet.with(|f| f.selected.clone());

    view! {
        <DashboardFrame>
            <div class="mb-4 flex items-center justify-between">
                <h1 class="text-2xl font-bold">{move || t(ui.get().locale, Text::Map)}</h1>
                <span class="text-sm opacity-60">{move || fleet.with(|f| placed_caption(&f.assets))}</span>
            </div>
            <div class="grid grid-cols-1 gap-4 lg:grid-cols-4">
                <div class="lg:col-span-3">
                    <MapView/>
                </div>
                <ul class="menu max-h-96 overflow-y-auto rounded-box bg-base-100 shadow">
                    <For
                        each=move || rows.get()
                        key=|a| (a.id.clone(), a.status, a.current_location.as_ref().map(|l| l.speed.to_bits()))
                        children=move |asset| {
                            let id = asset.id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || selected().as_deref() == Some(id.as_str())
                            };
                            let on_click = {
                                let id = id.clone();
                                move |_| fleet.update(|f| f.toggle_selected(&id))
                            };
                            let dot = format!("background-color: {}", marker_color(asset.status, asset.speed()));
                            view! {
                                <li>
                                    <a class:menu-active=is_selected on:click=on_click>
                                        <span class="inline-block h-2 w-2 rounded-full" style=dot></span>
                                        <span class="flex-1">{format!("{} {}", asset.kind.icon(), asset.name)}</span>
                                        <span class="text-xs opacity-60">{format!("{:.0} km/h", asset.speed())}</span>
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
            {move || {
                selected()
                    .and_then(|id| fleet.with(|f| f.asset(&id).cloned()))
                    .map(|asset| {
                        let href = format!("/assets/{}", asset.id);
                        view! {
                            <div class="mt-4 alert">
                                <span>
                                    {format!(
                                        "{} · {}",
                                        asset.name,
                                        asset.address().unwrap_or("Unknown location"),
                                    )}
                                </span>
                                <A href=href attr:class="btn btn-sm">"Details"</A>
                            </div>
                        }
                    })
            }}
        </DashboardFrame>
    }
}
