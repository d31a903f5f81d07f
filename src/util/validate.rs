//! Structural credential checks for the login and signup forms.
//!
//! DESIGN
//! ======
//! Checks run on already-sanitized input. Callers apply them in a fixed
//! order (email, password, confirmation, team) and stop at the first failure,
//! so the error shown is always the earliest one and no request is sent.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use regex::Regex;

/// Characters accepted as the password "special" class.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A form failed a local structural check. `Display` is the user message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your password.")]
    MissingPassword,
    #[error(
        "Password must be at least 8 characters long and include an uppercase letter, lowercase letter, a number, and a special character."
    )]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please select a favorite team.")]
    MissingTeam,
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

/// At least [`MIN_PASSWORD_LEN`] characters drawn only from ASCII letters,
/// digits and [`PASSWORD_SPECIALS`], with one of each class present.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return false;
    }
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    if !password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c))
    {
        return false;
    }
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special)
}

/// Exact match between password and its confirmation.
pub fn confirmation_matches(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
