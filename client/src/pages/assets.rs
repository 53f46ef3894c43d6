//! Assets page: status summary, filters, and the sortable table.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use fleet::asset::{Asset, AssetStatus};
use fleet::pipeline::AssetQuery;
use leptos::prelude::*;

use crate::components::asset_filters::AssetFilters;
use crate::components::asset_table::AssetTable;
use crate::components::dashboard_frame::DashboardFrame;
use crate::state::fleet::FleetState;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, t};

/// Asset count per status, in `AssetStatus::ALL` order.
#[must_use]
pub fn status_counts(assets: &[Asset]) -> Vec<(AssetStatus, usize)> {
    AssetStatus::ALL
        .into_iter()
        .map(|status| (status, assets.iter().filter(|a| a.status == status).count()))
        .collect()
}

#[component]
pub fn AssetsPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = RwSignal::new(AssetQuery { page: 1, ..AssetQuery::default() });
    let counts = Memo::new(move |_| fleet.with(|f| status_counts(&f.assets)));

    view! {
        <DashboardFrame>
            <h1 class="mb-4 text-2xl font-bold">{move || t(ui.get().locale, Text::Assets)}</h1>
            <div class="mb-4 flex flex-wrap gap-2">
                <span class="badge badge-lg">{move || format!("{} total", fleet.with(|f| f.assets.len()))}</span>
                {move || {
                    counts
                        .get()
                        .into_iter()
                        .map(|(status, n)| {
                            view! {
                                <span class=format!("badge badge-lg {}", status.badge_class())>
                                    {format!("{n} {}", status.label())}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <AssetFilters query/>
                    <AssetTable query/>
                </div>
            </div>
        </DashboardFrame>
    }
}
