//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the login credentials, and the session store.
//! Everything is behind `Arc` so clones are cheap per request.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::credentials::Credentials;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub credentials: Arc<Credentials>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let credentials = Credentials::new(&config.login_username, &config.login_password);
        let sessions = SessionStore::new(config.session_ttl);
        Self { config: Arc::new(config), credentials: Arc::new(credentials), sessions: Arc::new(sessions) }
    }
}
