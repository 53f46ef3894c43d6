//! Auth routes: username/password login, logout, and the current user.

use axum::body::Bytes;
use axum::extract::{FromRef, OptionalFromRequestParts, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use serde_json::Value;
use time::Duration;

use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "dashboard_session";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct User {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<User>,
}

fn error(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Signed-in user resolved from the session cookie. Extract as
/// `Option<AuthUser>`; a missing or stale cookie yields `None`.
pub struct AuthUser {
    pub username: String,
    pub token: String,
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let app_state = AppState::from_ref(state);
        Ok(app_state
            .sessions
            .lookup(token)
            .await
            .map(|username| Self { username, token: token.to_owned() }))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: check credentials, start a session, set cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, body: Bytes) -> Response {
    let Ok(body) = serde_json::from_slice::<Value>(&body) else {
        return error(StatusCode::BAD_REQUEST, "Invalid JSON body");
    };
    let field = |name: &str| body.get(name).and_then(Value::as_str);

    let username = match state.credentials.verify(field("username"), field("password")) {
        Ok(username) => username,
        Err(e) => {
            tracing::info!(reason = %e, "login rejected");
            return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
        }
    };

    let token = state.sessions.create(&username).await;
    tracing::info!(%username, "login succeeded");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, Json(LoginResponse { ok: true, username })).into_response()
}

/// `POST /api/auth/logout`: drop the session if any and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar, auth: Option<AuthUser>) -> impl IntoResponse {
    if let Some(auth) = auth {
        state.sessions.remove(&auth.token).await;
        tracing::info!(username = %auth.username, "logged out");
    }
    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);
    (jar.add(cookie), StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`: the signed-in user, or `{user: null}`.
pub async fn me(auth: Option<AuthUser>) -> Json<MeResponse> {
    Json(MeResponse { user: auth.map(|a| User { email: a.username }) })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
