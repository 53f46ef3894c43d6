//! # client
//!
//! Leptos SSR + hydrate frontend for the fleet dashboard.
//!
//! Pages and components render views over the `fleet` engine; `state` holds
//! the reactive contexts, `net` the REST helpers for auth and map config,
//! and `util` the browser glue (localStorage, theme, pointer capture).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
