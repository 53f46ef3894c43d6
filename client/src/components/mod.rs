//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and data panels while reading/writing
//! shared state from Leptos context providers.

pub mod asset_filters;
pub mod asset_table;
pub mod dashboard_frame;
pub mod header;
pub mod map_view;
pub mod speed_chart;
pub mod stats_panel;
pub mod widget_card;
