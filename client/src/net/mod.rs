//! Networking modules for the dashboard's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth and map-config calls, and `types` defines the
//! shared JSON schema for those endpoints.

pub mod api;
pub mod types;
