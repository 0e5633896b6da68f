//! In-memory paste storage with expiry.

use chrono::{DateTime, Duration, Utc};
use codedrop_core::constants::PASTE_ID_LEN;
use codedrop_core::Paste;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Thread-safe map of live pastes keyed by identifier.
#[derive(Debug, Default)]
pub struct PasteStore {
    pastes: Mutex<HashMap<String, Paste>>,
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PASTE_ID_LEN)
        .map(char::from)
        .collect()
}

impl PasteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Paste>> {
        // A poisoned map is still structurally valid.
        self.pastes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a new paste that expires `ttl_seconds` after `now`.
    ///
    /// An expiry past the representable range is clamped to the latest
    /// timestamp.
    ///
    /// # Returns
    /// The stored record, including its fresh identifier.
    pub fn insert(
        &self,
        content: String,
        language: String,
        ttl_seconds: u64,
        now: DateTime<Utc>,
    ) -> Paste {
        let mut pastes = self.lock();
        let id = loop {
            let candidate = generate_id();
            if !pastes.contains_key(&candidate) {
                break candidate;
            }
        };
        let expires_at = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let paste = Paste {
            id: id.clone(),
            content,
            language,
            created_at: Some(now),
            expires_at: Some(expires_at),
        };
        pastes.insert(id, paste.clone());
        paste
    }

    /// Look up a live paste. Expired records are dropped on access.
    pub fn get(&self, id: &str, now: DateTime<Utc>) -> Option<Paste> {
        let mut pastes = self.lock();
        let expired = pastes
            .get(id)?
            .expires_at
            .is_some_and(|expires_at| expires_at <= now);
        if expired {
            pastes.remove(id);
            return None;
        }
        pastes.get(id).cloned()
    }

    /// Remove every paste whose expiry is at or before `now`.
    ///
    /// # Returns
    /// Number of records removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut pastes = self.lock();
        let before = pastes.len();
        pastes.retain(|_, paste| paste.expires_at.map_or(true, |expires_at| expires_at > now));
        before - pastes.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_alphanumeric_ids() {
        let store = PasteStore::new();
        let now = Utc::now();
        let paste = store.insert("x".into(), "rust".into(), 60, now);
        assert_eq!(paste.id.len(), PASTE_ID_LEN);
        assert!(paste.id.chars().all(|ch| ch.is_ascii_alphanumeric()));
        assert_eq!(paste.expires_at, Some(now + Duration::seconds(60)));
        assert_eq!(store.get(&paste.id, now), Some(paste));
    }

    #[test]
    fn expired_paste_is_invisible_and_removed() {
        let store = PasteStore::new();
        let now = Utc::now();
        let paste = store.insert("x".into(), "go".into(), 60, now);
        assert!(store.get(&paste.id, now + Duration::seconds(59)).is_some());
        assert!(store.get(&paste.id, now + Duration::seconds(60)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn oversized_ttl_clamps_expiry_instead_of_overflowing() {
        let store = PasteStore::new();
        let now = Utc::now();
        for ttl in [u64::MAX, (i64::MAX / 1000) as u64, i64::MAX as u64] {
            let paste = store.insert("x".into(), "rust".into(), ttl, now);
            assert_eq!(paste.expires_at, Some(DateTime::<Utc>::MAX_UTC));
            assert!(store.get(&paste.id, now).is_some());
        }
    }

    #[test]
    fn purge_only_drops_expired_records() {
        let store = PasteStore::new();
        let now = Utc::now();
        store.insert("short".into(), "c".into(), 60, now);
        let keep = store.insert("long".into(), "c".into(), 3600, now);
        assert_eq!(store.purge_expired(now + Duration::seconds(120)), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get(&keep.id, now).is_some());
    }
}
