//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page except `login` and `not_found` renders inside
//! `DashboardFrame`.

pub mod alerts;
pub mod asset_detail;
pub mod assets;
pub mod geofences;
pub mod login;
pub mod map;
pub mod not_found;
pub mod overview;
