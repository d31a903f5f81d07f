//! One signup submit cycle plus the timed hand-off back to `/login`.

#[cfg(test)]
#[path = "signup_submit_test.rs"]
mod signup_submit_test;

use std::time::Duration;

use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::SignupRequest;
use crate::util::liveness::Liveness;
use crate::util::pause::Pause;
use crate::util::sanitize::sanitize;
use crate::util::validate::{ValidationError, confirmation_matches, is_valid_email, is_valid_password};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Successful account creation! Redirecting to login.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Input failed a local check; nothing was sent.
    Invalid(ValidationError),
    Registered,
    Failed(AuthError),
    /// The page went away mid-request; nothing was applied.
    Abandoned,
}

impl SignupOutcome {
    /// Error text for the form, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.to_string()),
            Self::Failed(err) => Some(err.user_message()),
            Self::Registered | Self::Abandoned => None,
        }
    }
}

/// Sanitize and check raw signup fields in display-precedence order:
/// email, password strength, confirmation, team.
///
/// # Errors
///
/// The first failing check.
pub fn prepare_signup(
    raw_email: &str,
    raw_password: &str,
    raw_confirmation: &str,
    raw_team: &str,
) -> Result<SignupRequest, ValidationError> {
    let username = sanitize(raw_email);
    let password = sanitize(raw_password);
    let confirmation = sanitize(raw_confirmation);
    let favorite_team = sanitize(raw_team);

    if !is_valid_email(&username) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_password(&password) {
        return Err(ValidationError::WeakPassword);
    }
    if !confirmation_matches(&password, &confirmation) {
        return Err(ValidationError::PasswordMismatch);
    }
    if favorite_team.is_empty() {
        return Err(ValidationError::MissingTeam);
    }
    Ok(SignupRequest { username, password, favorite_team })
}

/// Validate and register. Signup issues no token; the user signs in after.
pub async fn submit_signup<A: AuthApi>(
    api: &A,
    liveness: &Liveness,
    raw_email: &str,
    raw_password: &str,
    raw_confirmation: &str,
    raw_team: &str,
) -> SignupOutcome {
    let request = match prepare_signup(raw_email, raw_password, raw_confirmation, raw_team) {
        Ok(request) => request,
        Err(err) => return SignupOutcome::Invalid(err),
    };

    let result = api.signup(&request).await;
    if !liveness.is_alive() {
        return SignupOutcome::Abandoned;
    }
    match result {
        Ok(()) => SignupOutcome::Registered,
        Err(err) => SignupOutcome::Failed(err),
    }
}

/// Wait out the success banner. `false` means the page is gone and the
/// redirect must not happen.
pub async fn hold_before_redirect<P: Pause>(pause: &P, liveness: &Liveness, delay: Duration) -> bool {
    pause.pause(delay).await;
    liveness.is_alive()
}
