//! Wire DTOs for the external auth service.
//!
//! DESIGN
//! ======
//! Request field names follow the service contract (`username` carries the
//! email). Response types are lenient: optional fields default, and the
//! profile payload stays untyped until the API layer decides whether it is
//! usable.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::session::UserProfile;

/// Body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Sanitized email address.
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /signup`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Sanitized email address.
    pub username: String,
    pub password: String,
    pub favorite_team: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("favorite_team", &self.favorite_team)
            .finish()
    }
}

/// Successful `POST /login` body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Optional profile payload; shape is not trusted.
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Error body returned on any non-success status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    /// Usually a string; some service errors send structured detail instead.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Human-readable detail, when the service sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// What a successful login hands to the caller for committing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub profile: Option<UserProfile>,
}
