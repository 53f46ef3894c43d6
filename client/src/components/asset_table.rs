//! Sortable, paginated assets table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs `AssetQuery` (filter, then sort, then page) over the shared fleet.
//! Header clicks toggle sort; pager buttons go through `goto_page` so an
//! out-of-range request never lands.

#[cfg(test)]
#[path = "asset_table_test.rs"]
mod asset_table_test;

use fleet::asset::{Asset, Timestamp};
use fleet::insights::format_relative_time;
use fleet::pipeline::{AssetQuery, PageView, SortField, SortState, goto_page};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::fleet::FleetState;

/// Owned copy of one table page, so it can live in a `Memo`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Asset>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub first_row: usize,
    pub last_row: usize,
}

impl TablePage {
    #[must_use]
    pub fn from_view(view: &PageView<'_>) -> Self {
        Self {
            rows: view.rows.iter().map(|a| (*a).clone()).collect(),
            page: view.page,
            total_pages: view.total_pages,
            total_matches: view.total_matches,
            first_row: view.first_row(),
            last_row: view.last_row(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        if self.total_matches == 0 {
            return "No assets match the current filters".to_owned();
        }
        format!("Showing {}–{} of {} assets", self.first_row, self.last_row, self.total_matches)
    }
}

/// Header text with the active sort arrow.
#[must_use]
pub fn header_label(field: SortField, sort: SortState) -> String {
    match sort.indicator(field) {
        Some(arrow) => format!("{} {arrow}", field.label()),
        None => field.label().to_owned(),
    }
}

/// Speed cell text.
#[must_use]
pub fn speed_label(asset: &Asset) -> String {
    if asset.current_location.is_some() { format!("{:.1} km/h", asset.speed()) } else { "-".to_owned() }
}

#[component]
pub fn AssetTable(query: RwSignal<AssetQuery>) -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let page = Memo::new(move |_| fleet.with(|f| query.with(|q| TablePage::from_view(&q.run(&f.assets)))));
    let now = Memo::new(move |_| fleet.with(|f| f.clock));

    let go = move |requested: usize| {
        let total = page.get_untracked().total_matches;
        if let Some(p) = goto_page(requested, total) {
            query.update(|q| q.page = p);
        }
    };

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        {SortField::ALL
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <th
                                        class="cursor-pointer select-none"
                                        on:click=move |_| query.update(|q| q.sort.toggle(field))
                                    >
                                        {move || header_label(field, query.get().sort)}
                                    </th>
                                }
                            })
                            .collect_view()}
                        <th>"Location"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page.get().rows
                        key=|asset| (asset.id.clone(), asset.last_update)
                        children=move |asset| view! { <AssetRow asset now=now.get_untracked()/> }
                    />
                </tbody>
            </table>
        </div>
        <div class="flex items-center justify-between mt-3">
            <span class="text-sm opacity-70">{move || page.get().summary()}</span>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || page.get().page <= 1
                    on:click=move |_| go(page.get_untracked().page.saturating_sub(1))
                >
                    "«"
                </button>
                <span class="join-item btn btn-sm btn-disabled">
                    {move || format!("Page {} of {}", page.get().page, page.get().total_pages)}
                </span>
                <button
                    class="join-item btn btn-sm"
                    disabled=move || page.get().page >= page.get().total_pages
                    on:click=move |_| go(page.get_untracked().page + 1)
                >
                    "»"
                </button>
            </div>
        </div>
    }
}

#[component]
fn AssetRow(asset: Asset, now: Timestamp) -> impl IntoView {
    let href = format!("/assets/{}", asset.id);
    let id = asset.id.clone();
    view! {
        <tr class="hover">
            <td class="font-mono">
                <A href=href>{id.clone()}</A>
            </td>
            <td>{asset.name.clone()}</td>
            <td>{format!("{} {}", asset.kind.icon(), asset.kind.label())}</td>
            <td>
                <span class=format!("badge {}", asset.status.badge_class())>{asset.status.label()}</span>
            </td>
            <td>{speed_label(&asset)}</td>
            <td>{format_relative_time(Some(asset.last_update), now)}</td>
            <td class="max-w-xs truncate">{asset.address().unwrap_or("Unknown").to_owned()}</td>
        </tr>
    }
}
