//! In-memory session store.
//!
//! ARCHITECTURE
//! ============
//! Sessions map an opaque cookie token to the signed-in username. They live
//! only in process memory, so a restart signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired entries are rejected on lookup and swept periodically by
//! `spawn_sweeper`, rather than removed eagerly on every read.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

/// How often the sweeper drops expired sessions.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    username: String,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: RwLock::new(HashMap::new()), ttl }
    }

    /// Create a session for `username`, returning its token.
    pub async fn create(&self, username: &str) -> String {
        let token = generate_token();
        let session = Session { username: username.to_owned(), expires_at: Instant::now() + self.ttl };
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Username for a live session, `None` for unknown or expired tokens.
    pub async fn lookup(&self, token: &str) -> Option<String> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token)?;
        (session.expires_at > Instant::now()).then(|| session.username.clone())
    }

    /// Remove a session. Returns whether one existed.
    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop expired sessions, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Periodically purge expired sessions for the life of the process.
pub fn spawn_sweeper(store: Arc<SessionStore>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                let remaining = store.count().await;
                tracing::debug!(purged, remaining, "expired sessions swept");
            }
        }
    })
}
