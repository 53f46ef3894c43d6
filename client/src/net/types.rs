//! Shared JSON DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server builds its responses from the same shapes, so field names here
//! are the wire contract for `/api/auth/*` and `/api/map/config`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as seen by the client. Only the projection the session
/// exposes is kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

/// `GET /api/auth/me` body. `user` is `null` when there is no session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: Option<User>,
}

/// `POST /api/auth/login` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/map/config` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    pub maptiler_key: Option<String>,
}

impl MapConfig {
    /// The key, treating blank strings as absent.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.maptiler_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}
