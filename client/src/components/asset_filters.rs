//! Status / type / search controls for the assets table.
//!
//! Any filter change returns the table to page 1.

#[cfg(test)]
#[path = "asset_filters_test.rs"]
mod asset_filters_test;

use fleet::asset::{AssetStatus, AssetType};
use fleet::pipeline::{AssetQuery, Choice};
use leptos::prelude::*;

/// `<option>` value standing for every variant.
pub const ALL_VALUE: &str = "all";

/// Select value for a choice.
#[must_use]
pub fn choice_value<T: Copy>(choice: Choice<T>, name: fn(T) -> &'static str) -> &'static str {
    match choice {
        Choice::All => ALL_VALUE,
        Choice::Only(v) => name(v),
    }
}

/// Parse a select value; unknown values read as "all".
#[must_use]
pub fn parse_choice<T>(value: &str, parse: fn(&str) -> Option<T>) -> Choice<T> {
    parse(value).map_or(Choice::All, Choice::Only)
}

#[component]
pub fn AssetFilters(query: RwSignal<AssetQuery>) -> impl IntoView {
    let on_status = move |ev| {
        let next = parse_choice(&event_target_value(&ev), AssetStatus::from_name);
        query.update(|q| {
            q.filter.status = next;
            q.page = 1;
        });
    };
    let on_kind = move |ev| {
        let next = parse_choice(&event_target_value(&ev), AssetType::from_name);
        query.update(|q| {
            q.filter.kind = next;
            q.page = 1;
        });
    };
    let on_search = move |ev| {
        let text = event_target_value(&ev);
        query.update(|q| {
            q.filter.search = text;
            q.page = 1;
        });
    };
    let on_clear = move |_| {
        query.update(|q| {
            q.filter.clear();
            q.page = 1;
        });
    };

    view! {
        <div class="flex flex-wrap items-end gap-3">
            <label class="form-control">
                <span class="label-text">"Status"</span>
                <select
                    class="select select-bordered select-sm"
                    prop:value=move || choice_value(query.get().filter.status, AssetStatus::as_str)
                    on:change=on_status
                >
                    <option value=ALL_VALUE>"All statuses"</option>
                    {AssetStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="form-control">
                <span class="label-text">"Type"</span>
                <select
                    class="select select-bordered select-sm"
                    prop:value=move || choice_value(query.get().filter.kind, AssetType::as_str)
                    on:change=on_kind
                >
                    <option value=ALL_VALUE>"All types"</option>
                    {AssetType::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{format!("{} {}", k.icon(), k.label())}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="form-control grow">
                <span class="label-text">"Search"</span>
                <input
                    class="input input-bordered input-sm"
                    type="search"
                    placeholder="ID, name or address"
                    prop:value=move || query.get().filter.search
                    on:input=on_search
                />
            </label>
            <button
                class="btn btn-ghost btn-sm"
                disabled=move || query.get().filter.is_empty()
                on:click=on_clear
            >
                "Clear filters"
            </button>
        </div>
    }
}
