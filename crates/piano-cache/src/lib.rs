//! # piano-cache
//!
//! Process-local key/value store with per-entry expiry, used to short-circuit
//! repeated reads against the backend.
//!
//! - **Last write wins**: `set` overwrites whatever was stored under the key.
//! - **Lazy expiry**: `get` treats an entry whose age exceeds its TTL as absent
//!   and evicts it on the spot.
//! - **Optional sweep**: `sweep` drops every expired entry at once. It is an
//!   optimization only; correctness never depends on it.
//! - No capacity bound and no LRU/LFU.
//!
//! [`TtlCache`] takes `&mut self` for every mutation, including `get`. Callers
//! that share it across tasks wrap it in a mutex.
//!
//! ```
//! use std::time::Duration;
//! use piano_cache::TtlCache;
//!
//! let mut cache = TtlCache::new();
//! cache.set("students_GET", vec!["Alice", "Bob"], Duration::from_secs(300));
//! assert_eq!(cache.get("students_GET").map(Vec::len), Some(2));
//! ```

mod clock;
mod entry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

/// Key/value store with per-entry time-to-live.
#[derive(Debug)]
pub struct TtlCache<K, V, C = SystemClock> {
    entries: HashMap<K, CacheEntry<V>>,
    clock: C,
}

impl<K, V> Default for TtlCache<K, V, SystemClock>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash,
{
    /// Create an empty cache driven by the system monotonic clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Create an empty cache driven by `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    /// Store `value` under `key`, expiring `ttl` from now. Replaces any
    /// existing entry for `key`.
    pub fn set(&mut self, key: K, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        self.entries.insert(key, entry);
    }

    /// Return the value stored under `key` if it has not expired.
    ///
    /// An expired entry is removed before `None` is returned.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        if self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now))
        {
            self.entries.remove(key);
            tracing::trace!("cache entry expired on access");
            return None;
        }
        self.entries.get(key).map(CacheEntry::value)
    }

    /// Remove every expired entry. Returns how many were dropped.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.entries.len(), "swept expired cache entries");
        }
        removed
    }

    /// Remove the entry for `key`, expired or not, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(CacheEntry::into_value)
    }

    /// Keep only entries whose key satisfies `keep`. Returns how many were
    /// dropped.
    pub fn retain_keys<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|key, _| keep(key));
        before - self.entries.len()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The clock driving expiry.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
