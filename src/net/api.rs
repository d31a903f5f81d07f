//! HTTP client for the external auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: calls fail as unreachable, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any non-success status is a rejection. The service's `detail` is logged
//! and kept on the error, but users only ever see the generic
//! "Login failed." / "Signup failed." text. Send failures and unreadable success bodies are
//! `Unreachable`; their cause is logged here and never shown to the user.
//! Committing the session is the caller's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{AuthError, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
use super::types::{ErrorResponse, LoginGrant, LoginRequest, LoginResponse, SignupRequest};
use crate::state::session::UserProfile;

/// Transport seam for the login and signup calls.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// # Errors
    ///
    /// [`AuthError::Rejected`] when the service refuses the credentials,
    /// [`AuthError::Unreachable`] when no usable answer arrives.
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthError>;

    /// # Errors
    ///
    /// Same classes as [`AuthApi::login`].
    async fn signup(&self, request: &SignupRequest) -> Result<(), AuthError>;
}

#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/{}", path.trim_start_matches('/'))
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<(bool, String), AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| log_unreachable(url, &e))?
        .send()
        .await
        .map_err(|e| log_unreachable(url, &e))?;
    let accepted = resp.ok();
    let text = resp.text().await.map_err(|e| log_unreachable(url, &e))?;
    Ok((accepted, text))
}

fn log_unreachable(url: &str, err: &dyn std::fmt::Display) -> AuthError {
    leptos::logging::error!("auth request to {url} failed: {err}");
    AuthError::unreachable(err)
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthError> {
        let url = self.endpoint("/login");
        #[cfg(feature = "csr")]
        {
            let (accepted, body) = post_json(&url, request).await?;
            interpret_login_response(accepted, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(log_unreachable(&url, &"not available outside the browser"))
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), AuthError> {
        let url = self.endpoint("/signup");
        #[cfg(feature = "csr")]
        {
            let (accepted, body) = post_json(&url, request).await?;
            interpret_signup_response(accepted, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(log_unreachable(&url, &"not available outside the browser"))
        }
    }
}

// =============================================================================
// RESPONSE INTERPRETATION
// =============================================================================

/// Map a `/login` answer to a grant or an error.
///
/// # Errors
///
/// `Rejected` for non-success statuses, `Unreachable` when a success body
/// carries no token or an empty one.
pub fn interpret_login_response(accepted: bool, body: &str) -> Result<LoginGrant, AuthError> {
    if !accepted {
        return Err(rejection(body, LOGIN_FAILED_MESSAGE));
    }
    let resp: LoginResponse = serde_json::from_str(body).map_err(|e| {
        leptos::logging::error!("unreadable login response: {e}");
        AuthError::unreachable(e)
    })?;
    if resp.access_token.trim().is_empty() {
        leptos::logging::error!("login response carried an empty access token");
        return Err(AuthError::unreachable("empty access token"));
    }
    let profile = resp.user.and_then(parse_profile);
    Ok(LoginGrant { token: resp.access_token, profile })
}

/// Map a `/signup` answer. The success body is not inspected.
///
/// # Errors
///
/// `Rejected` for non-success statuses.
pub fn interpret_signup_response(accepted: bool, body: &str) -> Result<(), AuthError> {
    if accepted {
        Ok(())
    } else {
        Err(rejection(body, SIGNUP_FAILED_MESSAGE))
    }
}

fn rejection(body: &str, message: &'static str) -> AuthError {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    let detail = parsed.message().unwrap_or(message);
    leptos::logging::warn!("auth service rejected request: {detail}");
    AuthError::rejected(detail, message)
}

fn parse_profile(raw: serde_json::Value) -> Option<UserProfile> {
    match serde_json::from_value::<UserProfile>(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed profile in login response: {e}");
            None
        }
    }
}
