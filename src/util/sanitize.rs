//! Raw form-input scrubbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every text field on the auth forms passes through [`sanitize`] before any
//! validation or network use, so markup and quote characters never reach the
//! auth service or get echoed back into the DOM.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Characters stripped from all raw input.
pub const STRIPPED_CHARS: [char; 5] = ['<', '>', '"', '\'', '`'];

/// Remove markup/quote characters and surrounding whitespace.
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    stripped.trim().to_owned()
}
