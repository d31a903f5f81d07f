use super::*;

// =============================================================
// Helpers
// =============================================================

fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::default();
    (SessionStore::new(storage.clone()), storage)
}

fn profile(team: &str) -> UserProfile {
    UserProfile { favorite_team: Some(team.to_owned()) }
}

/// Shared map that refuses writes to one key.
#[derive(Clone, Default)]
struct RefusesKey {
    inner: MemoryStorage,
    refused: std::rc::Rc<std::cell::Cell<Option<&'static str>>>,
}

impl KeyValueStore for RefusesKey {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.refused.get() == Some(key) {
            return Err(StorageError::WriteRejected { key: key.to_owned() });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

// =============================================================
// commit / current
// =============================================================

#[test]
fn empty_storage_has_no_session() {
    let (sessions, _) = store();
    assert_eq!(sessions.current(), None);
}

#[test]
fn commit_then_current_round_trips_token_and_profile() {
    let (sessions, _) = store();
    sessions.commit("tok-1", Some(&profile("Chicago Bulls"))).unwrap();

    let session = sessions.current().unwrap();
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.profile, Some(profile("Chicago Bulls")));
}

#[test]
fn commit_uses_distinct_token_and_profile_keys() {
    let (sessions, storage) = store();
    sessions.commit("tok-1", Some(&profile("Miami Heat"))).unwrap();

    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
    let raw = storage.get_item(PROFILE_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, serde_json::json!({ "favorite_team": "Miami Heat" }));
}

#[test]
fn commit_overwrites_prior_session_including_profile() {
    let (sessions, _) = store();
    sessions.commit("old", Some(&profile("Utah Jazz"))).unwrap();
    sessions.commit("new", None).unwrap();

    let session = sessions.current().unwrap();
    assert_eq!(session.token, "new");
    assert_eq!(session.profile, None);
}

#[test]
fn failed_profile_write_leaves_no_mixed_session() {
    let storage = RefusesKey::default();
    let sessions = SessionStore::new(storage.clone());
    sessions.commit("old-user", Some(&profile("Utah Jazz"))).unwrap();

    storage.refused.set(Some(PROFILE_KEY));
    let result = sessions.commit("new-user", Some(&profile("Boston Celtics")));

    assert_eq!(result, Err(StorageError::WriteRejected { key: PROFILE_KEY.to_owned() }));
    assert_eq!(sessions.current(), None);
    assert_eq!(storage.get_item(PROFILE_KEY), None);
}

#[test]
fn failed_token_write_drops_the_new_profile_too() {
    let storage = RefusesKey::default();
    let sessions = SessionStore::new(storage.clone());
    sessions.commit("old-user", Some(&profile("Utah Jazz"))).unwrap();

    storage.refused.set(Some(TOKEN_KEY));
    let result = sessions.commit("new-user", Some(&profile("Boston Celtics")));

    assert_eq!(result, Err(StorageError::WriteRejected { key: TOKEN_KEY.to_owned() }));
    assert_eq!(sessions.current(), None);
    assert_eq!(storage.get_item(PROFILE_KEY), None);
}

#[test]
fn session_is_visible_to_a_second_store_over_the_same_storage() {
    let (sessions, storage) = store();
    sessions.commit("tok-1", None).unwrap();

    let reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.current().map(|s| s.token), Some("tok-1".to_owned()));
}

// =============================================================
// Malformed / partial data
// =============================================================

#[test]
fn empty_token_counts_as_no_session() {
    let (sessions, storage) = store();
    storage.set_item(TOKEN_KEY, "").unwrap();
    assert_eq!(sessions.current(), None);
}

#[test]
fn malformed_profile_is_discarded_not_propagated() {
    let (sessions, storage) = store();
    storage.set_item(TOKEN_KEY, "tok-1").unwrap();
    storage.set_item(PROFILE_KEY, "{not json").unwrap();

    let session = sessions.current().unwrap();
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.profile, None);
}

#[test]
fn profile_without_team_parses_as_absent_team() {
    let (sessions, storage) = store();
    storage.set_item(TOKEN_KEY, "tok-1").unwrap();
    storage.set_item(PROFILE_KEY, "{}").unwrap();

    let session = sessions.current().unwrap();
    assert_eq!(session.profile.as_ref().and_then(UserProfile::favorite_team), None);
}

#[test]
fn empty_team_is_treated_as_absent() {
    assert_eq!(profile("").favorite_team(), None);
    assert_eq!(profile("Orlando Magic").favorite_team(), Some("Orlando Magic"));
}

#[test]
fn profile_without_token_is_not_a_session() {
    let (sessions, storage) = store();
    storage.set_item(PROFILE_KEY, r#"{"favorite_team":"Utah Jazz"}"#).unwrap();
    assert_eq!(sessions.current(), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_both_entries() {
    let (sessions, storage) = store();
    sessions.commit("tok-1", Some(&profile("Denver Nuggets"))).unwrap();
    sessions.clear();

    assert_eq!(sessions.current(), None);
    assert_eq!(storage.get_item(PROFILE_KEY), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_outside_browser_reads_nothing_and_refuses_writes() {
    let sessions = SessionStore::new(BrowserStorage);
    assert_eq!(sessions.current(), None);
    assert_eq!(sessions.commit("tok", None), Err(StorageError::Unavailable));
}
