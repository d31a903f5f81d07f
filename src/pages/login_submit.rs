//! One login submit cycle, independent of the page that renders it.
//!
//! DESIGN
//! ======
//! sanitize -> validate -> throttle gate -> (delay) -> `/login` -> commit.
//! Validation failures stop before the attempt state or the network is
//! touched. After each suspension point the cycle checks [`Liveness`] and
//! abandons if the page has gone: late results never reach the session or
//! the failure counter, and the in-flight flag is released.

#[cfg(test)]
#[path = "login_submit_test.rs"]
mod login_submit_test;

use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::LoginRequest;
use crate::state::login::{AttemptCell, LoginAttemptState, SubmitGate, ThrottlePolicy};
use crate::state::session::{KeyValueStore, SessionStore, StorageError};
use crate::util::liveness::Liveness;
use crate::util::pause::Pause;
use crate::util::sanitize::sanitize;
use crate::util::validate::{ValidationError, is_valid_email};

pub const SESSION_NOT_SAVED_MESSAGE: &str =
    "Signed in, but your session could not be saved. Please enable browser storage and try again.";

/// Collaborators a login cycle runs against.
pub struct LoginDeps<'a, A, P, S> {
    pub api: &'a A,
    pub pause: &'a P,
    pub sessions: &'a SessionStore<S>,
    pub liveness: &'a Liveness,
    pub policy: ThrottlePolicy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Input failed a local check; nothing was sent.
    Invalid(ValidationError),
    /// A previous submit is still running.
    Busy,
    /// Session committed; safe to navigate to a protected route.
    SignedIn,
    Failed(AuthError),
    /// Service accepted the credentials but the session could not be stored.
    NotPersisted(StorageError),
    /// The page went away mid-cycle; nothing was applied.
    Abandoned,
}

impl LoginOutcome {
    /// Message for the form's error slot, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.to_string()),
            Self::Failed(err) => Some(err.user_message()),
            Self::NotPersisted(_) => Some(SESSION_NOT_SAVED_MESSAGE.to_owned()),
            Self::Busy | Self::SignedIn | Self::Abandoned => None,
        }
    }
}

/// Sanitize and check raw login fields.
///
/// # Errors
///
/// The first failing check, email before password.
pub fn prepare_login(raw_email: &str, raw_password: &str) -> Result<LoginRequest, ValidationError> {
    let username = sanitize(raw_email);
    let password = sanitize(raw_password);
    if !is_valid_email(&username) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(LoginRequest { username, password })
}

/// Run one submit cycle to completion.
pub async fn submit_login<A, P, S, C>(
    deps: &LoginDeps<'_, A, P, S>,
    attempts: &C,
    raw_email: &str,
    raw_password: &str,
) -> LoginOutcome
where
    A: AuthApi,
    P: Pause,
    S: KeyValueStore,
    C: AttemptCell,
{
    let request = match prepare_login(raw_email, raw_password) {
        Ok(request) => request,
        Err(err) => return LoginOutcome::Invalid(err),
    };

    let Some(gate) = attempts.try_modify(|state| state.begin_submit(&deps.policy)) else {
        return LoginOutcome::Abandoned;
    };
    let delay = match gate {
        SubmitGate::Busy => return LoginOutcome::Busy,
        SubmitGate::Proceed { delay } => delay,
    };

    if let Some(delay) = delay {
        leptos::logging::log!("login throttled; waiting {}ms", delay.as_millis());
        deps.pause.pause(delay).await;
        if !deps.liveness.is_alive() {
            return abandon(attempts);
        }
    }

    let result = deps.api.login(&request).await;
    if !deps.liveness.is_alive() {
        return abandon(attempts);
    }

    match result {
        Ok(grant) => {
            attempts.try_modify(LoginAttemptState::record_success);
            match deps.sessions.commit(&grant.token, grant.profile.as_ref()) {
                Ok(()) => LoginOutcome::SignedIn,
                Err(err) => {
                    leptos::logging::error!("failed to persist session: {err}");
                    LoginOutcome::NotPersisted(err)
                }
            }
        }
        Err(err) => {
            if err.is_rejection() {
                attempts.try_modify(LoginAttemptState::record_rejection);
            } else {
                attempts.try_modify(LoginAttemptState::finish);
            }
            LoginOutcome::Failed(err)
        }
    }
}

/// Close the cycle on a cell that may outlive the page. The verdict, if any,
/// is dropped; only the in-flight flag is released.
fn abandon<C: AttemptCell>(attempts: &C) -> LoginOutcome {
    attempts.try_modify(LoginAttemptState::finish);
    LoginOutcome::Abandoned
}
