//! Generic in-memory TTL registry backing the session and question stores.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::foundation::Timestamp;

/// One stored value plus the moment it was inserted.
#[derive(Debug)]
struct Entry<V> {
    value: V,
    created_at: Timestamp,
}

/// Id-keyed map whose entries stop being visible once their age exceeds the
/// TTL.
///
/// Expired entries are reclaimed lazily on lookup of their own key, or in
/// bulk by [`TtlRegistry::sweep_expired`], which the owning stores invoke
/// opportunistically before mutations.
#[derive(Debug)]
pub(crate) struct TtlRegistry<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl_secs: u64,
}

impl<K: Eq + Hash + Clone, V> TtlRegistry<K, V> {
    pub(crate) fn new(ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_secs,
        }
    }

    pub(crate) fn insert(&mut self, key: K, value: V, now: Timestamp) {
        self.entries.insert(
            key,
            Entry {
                value,
                created_at: now,
            },
        );
    }

    /// Looks up a live entry, removing it first if it expired.
    pub(crate) fn get(&mut self, key: &K, now: Timestamp) -> Option<&V> {
        if self.entry_expired(key, now) {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Mutable variant of [`TtlRegistry::get`].
    pub(crate) fn get_mut(&mut self, key: &K, now: Timestamp) -> Option<&mut V> {
        if self.entry_expired(key, now) {
            self.entries.remove(key);
            return None;
        }
        self.entries.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Removes every expired entry, returning how many were reclaimed.
    pub(crate) fn sweep_expired(&mut self, now: Timestamp) -> usize {
        let ttl_secs = self.ttl_secs;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.secs_since(&entry.created_at) <= ttl_secs);
        before - self.entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry_expired(&self, key: &K, now: Timestamp) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| now.secs_since(&entry.created_at) > self.ttl_secs)
    }
}
