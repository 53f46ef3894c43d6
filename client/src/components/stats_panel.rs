//! Fleet summary tiles: total, active, moving, alerts.

#[cfg(test)]
#[path = "stats_panel_test.rs"]
mod stats_panel_test;

use fleet::insights::DashboardStats;
use leptos::prelude::*;

use crate::state::fleet::FleetState;

/// Subtitle under the "Moving Now" tile.
#[must_use]
pub fn moving_caption(stats: &DashboardStats) -> String {
    format!("{}% of active assets in motion", stats.moving_rate())
}

/// Subtitle under the "Alerts" tile.
#[must_use]
pub fn alert_caption(stats: &DashboardStats) -> &'static str {
    if stats.alerts == 0 { "All assets operational" } else { "Assets need maintenance" }
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let stats = Memo::new(move |_| DashboardStats::from_assets(&fleet.get().assets));

    view! {
        <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
            <div class="stat">
                <div class="stat-figure text-primary text-3xl">"🚛"</div>
                <div class="stat-title">"Total Assets"</div>
                <div class="stat-value">{move || stats.get().total}</div>
                <div class="stat-desc">"Coverage across Southeast Asia"</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Active Assets"</div>
                <div class="stat-value text-success">{move || stats.get().active}</div>
                <div class="stat-desc">
                    "Utilization "
                    {move || format!("{}%", stats.get().active_rate())}
                </div>
                <progress
                    class="progress progress-success w-full"
                    value=move || stats.get().active_rate().to_string()
                    max="100"
                ></progress>
            </div>
            <div class="stat">
                <div class="stat-title">"Moving Now"</div>
                <div class="stat-value text-info">{move || stats.get().moving}</div>
                <div class="stat-desc">{move || moving_caption(&stats.get())}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Alerts"</div>
                <div class="stat-value text-error">{move || stats.get().alerts}</div>
                <div class="stat-desc">{move || alert_caption(&stats.get())}</div>
            </div>
        </div>
    }
}
