//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through `from_lookup` so tests can feed a plain map instead
//! of mutating process-wide environment state. `from_env` is the only caller
//! that touches `std::env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOGIN_USERNAME: &str = "admin";
pub const DEFAULT_LOGIN_PASSWORD: &str = "admin";
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 24;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid SESSION_TTL_HOURS: {0}")]
    InvalidSessionTtl(String),
    #[error("invalid boolean for {key}: {value}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Expected login name, already trimmed.
    pub login_username: String,
    pub login_password: String,
    /// Tile key handed to the map view; `None` disables it.
    pub maptiler_key: Option<String>,
    pub cookie_secure: bool,
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            login_username: DEFAULT_LOGIN_USERNAME.to_owned(),
            login_password: DEFAULT_LOGIN_PASSWORD.to_owned(),
            maptiler_key: None,
            cookie_secure: false,
            session_ttl: hours(DEFAULT_SESSION_TTL_HOURS),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional (all):
    /// - `PORT`: default 3000
    /// - `DASHBOARD_LOGIN_USERNAME`: default `admin`, trimmed
    /// - `DASHBOARD_LOGIN_PASSWORD`: default `admin`
    /// - `MAPTILER_KEY`: blank or absent disables the map
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    /// - `SESSION_TTL_HOURS`: default 24
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a present value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a present value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let session_ttl = match lookup("SESSION_TTL_HOURS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(h) if h > 0 => hours(h),
                _ => return Err(ConfigError::InvalidSessionTtl(raw)),
            },
            None => hours(DEFAULT_SESSION_TTL_HOURS),
        };
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::InvalidBool { key: "COOKIE_SECURE", value: raw })?
            }
            None => false,
        };

        Ok(Self {
            port,
            login_username: lookup("DASHBOARD_LOGIN_USERNAME")
                .map_or_else(|| DEFAULT_LOGIN_USERNAME.to_owned(), |u| u.trim().to_owned()),
            login_password: lookup("DASHBOARD_LOGIN_PASSWORD").unwrap_or_else(|| DEFAULT_LOGIN_PASSWORD.to_owned()),
            maptiler_key: lookup("MAPTILER_KEY").map(|k| k.trim().to_owned()).filter(|k| !k.is_empty()),
            cookie_secure,
            session_ttl,
        })
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn hours(h: u64) -> Duration {
    Duration::from_secs(h.saturating_mul(3600))
}
