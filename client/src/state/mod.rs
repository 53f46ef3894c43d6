//! Reactive application state, provided to the tree as `RwSignal` contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct is plain data with pure update methods; `app::App` wraps them
//! in signals and pages read or update them through context.

pub mod auth;
pub mod fleet;
pub mod overview;
pub mod ui;
