//! Services behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks and session bookkeeping so route
//! handlers can stay focused on request parsing and cookie plumbing.

pub mod credentials;
pub mod session;
