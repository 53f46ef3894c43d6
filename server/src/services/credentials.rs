//! Single-account credential check for dashboard login.
//!
//! Only SHA-256 digests of the configured username and password are kept.
//! Submitted values are hashed and compared byte-for-byte without early exit.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use sha2::{Digest, Sha256};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("missing username or password")]
    MissingFields,
    #[error("invalid credentials")]
    InvalidCredentials,
}

type Digest32 = [u8; 32];

fn digest(value: &str) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

fn digests_match(a: &Digest32, b: &Digest32) -> bool {
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[derive(Debug, Clone)]
pub struct Credentials {
    username: Digest32,
    password: Digest32,
}

impl Credentials {
    /// `username` is trimmed; `password` is kept verbatim.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: digest(username.trim()), password: digest(password) }
    }

    /// Check a login attempt, returning the trimmed username on success.
    ///
    /// # Errors
    ///
    /// `MissingFields` when either value is absent, `InvalidCredentials`
    /// when they do not match.
    pub fn verify(&self, username: Option<&str>, password: Option<&str>) -> Result<String, LoginError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(LoginError::MissingFields);
        };
        let username = username.trim();
        let user_ok = digests_match(&self.username, &digest(username));
        let pass_ok = digests_match(&self.password, &digest(password));
        if user_ok & pass_ok { Ok(username.to_owned()) } else { Err(LoginError::InvalidCredentials) }
    }
}
