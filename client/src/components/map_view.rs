//! Fleet map: geofence rings and asset markers over a projected viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markers are reconciled by asset id through `fleet::markers::MarkerRegistry`.
//! Each handle is a per-marker signal rendered by a keyed `For`, so a moved
//! asset updates its existing element instead of tearing it down.
//!
//! ERROR HANDLING
//! ==============
//! A missing tile key or failed config request renders a static error panel
//! in place of the map; the rest of the page keeps working.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use fleet::asset::Geofence;
use fleet::markers::{MAP_BOUNDS, MarkerRegistry, MarkerSpec, MarkerSurface, geofence_ring, marker_specs};
use leptos::prelude::*;

use crate::state::fleet::FleetState;
use crate::state::ui::{MapKey, UiState};

/// Vertices per geofence ring.
const RING_POINTS: usize = 32;

/// Marker surface whose handles are reactive signals.
#[derive(Debug, Default)]
pub struct SignalSurface;

impl MarkerSurface for SignalSurface {
    type Handle = RwSignal<MarkerSpec>;

    fn create(&mut self, spec: &MarkerSpec) -> Self::Handle {
        RwSignal::new(spec.clone())
    }

    fn update(&mut self, handle: &mut Self::Handle, spec: &MarkerSpec) {
        if handle.with_untracked(|current| current != spec) {
            handle.set(spec.clone());
        }
    }

    fn remove(&mut self, handle: Self::Handle) {
        handle.dispose();
    }
}

/// Inline style placing a marker at its projected position.
#[must_use]
pub fn marker_style(spec: &MarkerSpec) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; background-color: {};",
        spec.position.x_pct, spec.position.y_pct, spec.style.color
    )
}

/// Tooltip for a marker.
#[must_use]
pub fn marker_title(spec: &MarkerSpec) -> String {
    format!("{} · {:.0} km/h · {}", spec.name, spec.speed, spec.address)
}

/// SVG `points` for a geofence ring in the 0..100 viewBox.
#[must_use]
pub fn ring_points(fence: &Geofence) -> String {
    geofence_ring(fence, RING_POINTS)
        .into_iter()
        .map(|c| {
            let p = MAP_BOUNDS.project(c);
            format!("{:.3},{:.3}", p.x_pct, p.y_pct)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn MapView() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || match ui.get().map_key {
            MapKey::Loading => {
                view! {
                    <div class="flex h-96 items-center justify-center rounded-box bg-base-100">
                        <span class="loading loading-spinner"></span>
                    </div>
                }
                    .into_any()
            }
            MapKey::Unavailable(message) => {
                view! {
                    <div role="alert" class="alert alert-error h-96 flex-col justify-center">
                        <span class="text-3xl">"🗺️"</span>
                        <span class="font-semibold">"Map unavailable"</span>
                        <span class="text-sm">{message}</span>
                    </div>
                }
                    .into_any()
            }
            MapKey::Ready(_) => view! { <MarkerLayer/> }.into_any(),
        }}
    }
}

#[component]
fn MarkerLayer() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let registry = StoredValue::new(MarkerRegistry::<RwSignal<MarkerSpec>>::new());
    let markers = RwSignal::new(Vec::<(String, RwSignal<MarkerSpec>)>::new());

    Effect::new(move || {
        let specs = fleet.with(|f| marker_specs(&f.assets, f.selected.as_deref()));
        registry.update_value(|r| {
            let report = r.reconcile(&specs, &mut SignalSurface);
            if !report.created.is_empty() || !report.removed.is_empty() {
                markers.set(r.iter().map(|(id, h)| (id.to_owned(), *h)).collect());
            }
        });
    });
    on_cleanup(move || registry.update_value(|r| r.clear(&mut SignalSurface)));

    let geofences = move || fleet.with(|f| f.geofences.clone());

    view! {
        <div class="relative h-96 w-full overflow-hidden rounded-box bg-gradient-to-br from-sky-100 to-emerald-100">
            <svg class="absolute inset-0 h-full w-full" viewBox="0 0 100 100" preserveAspectRatio="none">
                <For
                    each=geofences
                    key=|fence| fence.id.clone()
                    children=move |fence| {
                        view! {
                            <polygon
                                points=ring_points(&fence)
                                fill="rgba(59,130,246,0.15)"
                                stroke="#3B82F6"
                                stroke-width="0.2"
                            >
                                <title>{format!("{} ({})", fence.name, fence.kind.label())}</title>
                            </polygon>
                        }
                    }
                />
            </svg>
            <For
                each=move || markers.get()
                key=|(id, _)| id.clone()
                children=move |(id, spec)| {
                    let on_click = move |_| fleet.update(|f| f.toggle_selected(&id));
                    view! {
                        <button
                            class="absolute -translate-x-1/2 -translate-y-1/2 rounded-full p-1 text-sm shadow"
                            class:ring-4=move || spec.get().style.selected
                            class:animate-pulse=move || spec.get().style.moving
                            style=move || marker_style(&spec.get())
                            title=move || marker_title(&spec.get())
                            on:click=on_click
                        >
                            {move || spec.get().style.icon}
                        </button>
                    }
                }
            />
        </div>
    }
}
