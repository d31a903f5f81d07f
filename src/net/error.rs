//! Auth service failure taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown for every transport-level failure; the cause is only logged.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service answered and refused the request. `detail` is the
    /// service's own text and is only logged; `message` is what the user sees.
    #[error("rejected: {detail}")]
    Rejected { detail: String, message: &'static str },
    /// The service could not be reached or its answer could not be read.
    #[error("auth service unreachable: {reason}")]
    Unreachable { reason: String },
}

impl AuthError {
    pub fn unreachable(reason: impl ToString) -> Self {
        Self::Unreachable { reason: reason.to_string() }
    }

    pub fn rejected(detail: impl ToString, message: &'static str) -> Self {
        Self::Rejected { detail: detail.to_string(), message }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Text safe to put in front of the user. Never names the field that
    /// failed or whether the account exists.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => (*message).to_owned(),
            Self::Unreachable { .. } => SERVER_ERROR_MESSAGE.to_owned(),
        }
    }
}
