//! Alerts page: severity summary and the alert feed.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use fleet::insights::{Alert, AlertStatus, AlertSummary, format_relative_time};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::dashboard_frame::DashboardFrame;
use crate::state::fleet::FleetState;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, t};

/// Summary tiles as (label, count, accent class).
#[must_use]
pub fn summary_tiles(summary: AlertSummary) -> [(&'static str, usize, &'static str); 4] {
    [
        ("Total Alerts", summary.total, ""),
        ("Critical", summary.critical, "text-error"),
        ("Warnings", summary.warning, "text-warning"),
        ("Info", summary.info, "text-info"),
    ]
}

/// Alerts still waiting for acknowledgement.
#[must_use]
pub fn open_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| a.status == AlertStatus::Open).count()
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = Memo::new(move |_| fleet.with(FleetState::alerts));
    let now = move || fleet.with(|f| f.clock);

    let on_ack = move |_| fleet.update(FleetState::acknowledge_all);

    view! {
        <DashboardFrame>
            <div class="mb-4 flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-2xl font-bold">{move || t(ui.get().locale, Text::Alerts)}</h1>
                <div class="flex gap-2">
                    <button
                        class="btn btn-primary btn-sm"
                        disabled=move || feed.with(|f| open_count(f) == 0)
                        on:click=on_ack
                    >
                        "Acknowledge All"
                    </button>
                    <A href="/map" attr:class="btn btn-sm">"View Map"</A>
                </div>
            </div>
            <div class="stats mb-4 w-full shadow">
                {move || {
                    summary_tiles(feed.with(|f| AlertSummary::from_alerts(f)))
                        .into_iter()
                        .map(|(label, count, accent)| {
                            view! {
                                <div class="stat">
                                    <div class="stat-title">{label}</div>
                                    <div class=format!("stat-value {accent}")>{count}</div>
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
                            <th>"Severity"</th>
                            <th>"Asset"</th>
                            <th>"Type"</th>
                            <th>"Description"</th>
                            <th>"Last Update"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || feed.get()
                            key=|a| (a.id.clone(), a.status)
                            children=move |alert| {
                                let href = format!("/assets/{}", alert.asset_id);
                                view! {
                                    <tr>
                                        <td>
                                            <span class=format!("badge {}", alert.severity.badge_class())>
                                                {alert.severity.as_str()}
                                            </span>
                                        </td>
                                        <td>
                                            <A href=href attr:class="link">{alert.asset_name.clone()}</A>
                                        </td>
                                        <td>{alert.kind.label()}</td>
                                        <td>{alert.description.clone()}</td>
                                        <td>{move || format_relative_time(Some(alert.timestamp), now())}</td>
                                        <td>
                                            <span
                                                class="badge badge-outline"
                                                class:badge-ghost={alert.status == AlertStatus::Acknowledged}
                                            >
                                                {alert.status.as_str()}
                                            </span>
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
