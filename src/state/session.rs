//! Persisted sign-in session: token plus optional user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page commits a session after the auth service accepts
//! credentials; every protected route reads it back through the route guard.
//! It lives in browser `localStorage` so it survives reloads.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is provided as a Leptos context and wraps a
//! [`KeyValueStore`]. The browser backend re-acquires `localStorage` on each
//! call so the store stays `Send + Sync`; tests use [`MemoryStorage`].
//!
//! TRADE-OFFS
//! ==========
//! Token presence is the only authorization predicate. No expiry, signature
//! or revocation check happens client-side; the auth service owns that.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Storage key for the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded [`UserProfile`].
pub const PROFILE_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("browser storage rejected write of '{key}'")]
    WriteRejected { key: String },
}

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot persist the value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

// =============================================================================
// BACKENDS
// =============================================================================

/// `window.localStorage`. Reads return `None` and writes fail outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    leptos::logging::warn!("failed to remove '{key}' from storage: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Process-local map; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries().remove(key);
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Per-user attributes returned at login and persisted alongside the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub favorite_team: Option<String>,
}

impl UserProfile {
    /// Favorite team, treating an empty string as absent.
    pub fn favorite_team(&self) -> Option<&str> {
        self.favorite_team.as_deref().filter(|team| !team.is_empty())
    }
}

/// Snapshot of the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: Option<UserProfile>,
}

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

/// Session store type provided as context by the application root.
pub type SessionContext = SessionStore<BrowserStorage>;

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a new session, replacing any previous one.
    ///
    /// The prior session is removed first and the token is written last, so
    /// a failed commit leaves no session at all rather than a new token
    /// paired with the previous user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the token or profile cannot be written.
    pub fn commit(&self, token: &str, profile: Option<&UserProfile>) -> Result<(), StorageError> {
        self.clear();
        if let Some(profile) = profile {
            let raw = serde_json::to_string(profile).map_err(|_| StorageError::WriteRejected {
                key: PROFILE_KEY.to_owned(),
            })?;
            self.storage.set_item(PROFILE_KEY, &raw)?;
        }
        if let Err(err) = self.storage.set_item(TOKEN_KEY, token) {
            self.storage.remove_item(PROFILE_KEY);
            return Err(err);
        }
        Ok(())
    }

    /// Read the current session. Missing or empty tokens mean no session;
    /// an unreadable profile is dropped rather than reported.
    pub fn current(&self) -> Option<Session> {
        let token = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let profile = self.storage.get_item(PROFILE_KEY).and_then(|raw| {
            match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    leptos::logging::warn!("discarding malformed stored profile: {e}");
                    None
                }
            }
        });
        Some(Session { token, profile })
    }

    /// Remove the session entirely.
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(PROFILE_KEY);
    }
}
