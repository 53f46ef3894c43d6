//! Geofences page: facility boundary summary and table.

#[cfg(test)]
#[path = "geofences_test.rs"]
mod geofences_test;

use fleet::asset::Geofence;
use fleet::insights::GeofenceSummary;
use leptos::prelude::*;

use crate::components::dashboard_frame::DashboardFrame;
use crate::state::fleet::FleetState;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, t};

/// Summary tiles as (label, count, accent class).
#[must_use]
pub fn summary_tiles(summary: GeofenceSummary) -> [(&'static str, usize, &'static str); 4] {
    [
        ("Total", summary.total, ""),
        ("Warehouses", summary.warehouses, "text-primary"),
        ("Ports", summary.ports, "text-info"),
        ("Hubs", summary.hubs, "text-success"),
    ]
}

/// Radius cell text, whole meters.
#[must_use]
pub fn radius_label(fence: &Geofence) -> String {
    format!("{:.0} m", fence.radius)
}

#[component]
pub fn GeofencesPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let fences = Memo::new(move |_| fleet.with(|f| f.geofences.clone()));

    view! {
        <DashboardFrame>
            <div class="mb-4">
                <h1 class="text-2xl font-bold">{move || t(ui.get().locale, Text::Geofences)}</h1>
                <p class="text-sm opacity-70">"Operational boundaries for facilities and ports"</p>
            </div>
            <div class="mb-4 grid grid-cols-2 gap-3 lg:grid-cols-4">
                {move || {
                    summary_tiles(fences.with(|f| GeofenceSummary::from_geofences(f)))
                        .into_iter()
                        .map(|(label, count, accent)| {
                            view! {
                                <div class="rounded-box border border-base-300 bg-base-100 p-3 shadow-sm">
                                    <div class="text-xs uppercase tracking-wide opacity-60">{label}</div>
                                    <div class=format!("text-xl font-semibold {accent}")>{count}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="overflow-x-auto rounded-box bg-base-100 shadow">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Radius"</th>
                            <th>"Country"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || fences.get()
                            key=|g| g.id.clone()
                            children=move |fence| {
                                view! {
                                    <tr class="hover">
                                        <td class="font-medium">{fence.name.clone()}</td>
                                        <td>{fence.kind.label()}</td>
                                        <td>{radius_label(&fence)}</td>
                                        <td>{fence.country.clone()}</td>
                                        <td>
                                            <span class="badge badge-success badge-sm">"Active"</span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </DashboardFrame>
    }
}
