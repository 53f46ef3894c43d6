//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session lookups fail closed: any transport or decode failure reads as
//! "not signed in". Login failures carry a user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{MapConfig, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ErrorBody, LoginResponse};

/// Fallback shown when the server rejects a login without a message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Failure of a REST call, rendered directly in the UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error")]
    Network,
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("not available on server")]
    Unavailable,
}

/// Message for a non-2xx login response.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(body: Option<ErrorBody>) -> String {
    body.map(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| LOGIN_FAILED.to_owned())
}

/// The user a successful login signs in as. The server echoes the trimmed
/// username; the submitted one is the fallback.
#[cfg(any(test, feature = "hydrate"))]
fn user_from_login(body: LoginResponse, submitted: &str) -> User {
    User { email: body.username.unwrap_or_else(|| submitted.to_owned()) }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::MeResponse>().await.ok()?.user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`. The username is trimmed before sending.
///
/// # Errors
///
/// [`ApiError::Rejected`] with the server's message (or [`LOGIN_FAILED`]) on
/// a non-2xx response, [`ApiError::Network`] when the request cannot be made.
pub async fn login(username: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let username = username.trim().to_owned();
        let payload = super::types::LoginRequest { username: username.clone(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if !resp.ok() {
            let body = resp.json::<ErrorBody>().await.ok();
            return Err(ApiError::Rejected(login_error_message(body)));
        }
        let body = resp
            .json::<LoginResponse>()
            .await
            .unwrap_or(LoginResponse { ok: true, username: None });
        Ok(user_from_login(body, &username))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the map tile configuration from `/api/map/config`.
///
/// # Errors
///
/// [`ApiError::Status`] on a non-2xx response, [`ApiError::Network`] on
/// transport or decode failure.
pub async fn fetch_map_config() -> Result<MapConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/map/config")
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<MapConfig>().await.map_err(|_| ApiError::Network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
