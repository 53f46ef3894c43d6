//! Fleet-tracking engine shared by the dashboard client and its tests.
//!
//! This crate is free of browser and server dependencies. It owns the asset
//! model, the synthetic data set, and every piece of derived state the
//! dashboard renders: the filter/sort/paginate pipeline, the overview widget
//! layout, the drag-to-reorder state machine, and keyed map-marker
//! reconciliation. Callers own I/O (storage, DOM, timers) and feed plain
//! values in; everything here is a pure function or an explicit state value.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`asset`] | Asset, geofence and event types with exhaustive label/icon tables |
//! | [`seed`] | Deterministic synthetic fleet, geofences, events, traces and speed series |
//! | [`pipeline`] | Filter, sort and pagination over the asset list |
//! | [`layout`] | Overview widget ids, row packing and reorder |
//! | [`drag`] | Pointer-driven drag state machine and hit geometry |
//! | [`markers`] | Map projection, marker styling and keyed reconciliation |
//! | [`insights`] | Dashboard stats, action queue, alerts and relative time |
//! | [`simulate`] | Timer-tick movement and geofence crossing events |
//! | [`prefs`] | Persisted preference keys and tolerant restore |

pub mod asset;
pub mod drag;
pub mod insights;
pub mod layout;
pub mod markers;
pub mod pipeline;
pub mod prefs;
pub mod seed;
pub mod simulate;
