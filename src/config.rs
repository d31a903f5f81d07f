//! Client configuration resolved at build time.
//!
//! Optional variables (read via `option_env!` when the WASM bundle is built):
//! - `COURTSIDE_AUTH_API_URL`: auth service base URL, default `http://localhost:8000`
//! - `COURTSIDE_LOGIN_FAILURE_THRESHOLD`: rejections before retries are delayed, default 3
//! - `COURTSIDE_LOGIN_RETRY_DELAY_MS`: delay applied past the threshold, default 3000
//! - `COURTSIDE_SIGNUP_REDIRECT_MS`: pause before leaving the signup page, default 2000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::login::{DEFAULT_FAILURE_THRESHOLD, DEFAULT_RETRY_DELAY_MS, ThrottlePolicy};

pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_SIGNUP_REDIRECT_MS: u64 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub auth_api_url: String,
    pub throttle: ThrottlePolicy,
    pub signup_redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Config baked in from the environment of the build.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_var)
    }

    /// Build config from an arbitrary variable lookup. Unset or unparseable
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let auth_api_url = lookup("COURTSIDE_AUTH_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_API_URL.to_owned());
        let throttle = ThrottlePolicy {
            failure_threshold: parse_or(&lookup, "COURTSIDE_LOGIN_FAILURE_THRESHOLD", DEFAULT_FAILURE_THRESHOLD),
            retry_delay: Duration::from_millis(parse_or(
                &lookup,
                "COURTSIDE_LOGIN_RETRY_DELAY_MS",
                DEFAULT_RETRY_DELAY_MS,
            )),
        };
        let signup_redirect_delay =
            Duration::from_millis(parse_or(&lookup, "COURTSIDE_SIGNUP_REDIRECT_MS", DEFAULT_SIGNUP_REDIRECT_MS));

        Self { auth_api_url, throttle, signup_redirect_delay }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn build_var(key: &str) -> Option<String> {
    let value = match key {
        "COURTSIDE_AUTH_API_URL" => option_env!("COURTSIDE_AUTH_API_URL"),
        "COURTSIDE_LOGIN_FAILURE_THRESHOLD" => option_env!("COURTSIDE_LOGIN_FAILURE_THRESHOLD"),
        "COURTSIDE_LOGIN_RETRY_DELAY_MS" => option_env!("COURTSIDE_LOGIN_RETRY_DELAY_MS"),
        "COURTSIDE_SIGNUP_REDIRECT_MS" => option_env!("COURTSIDE_SIGNUP_REDIRECT_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}
