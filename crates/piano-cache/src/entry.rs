use std::time::{Duration, Instant};

/// A stored value together with when it was stored and how long it lives.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    #[must_use]
    pub const fn new(value: V, stored_at: Instant, ttl: Duration) -> Self {
        Self {
            value,
            stored_at,
            ttl,
        }
    }

    /// Expired once strictly more than `ttl` has elapsed since storage.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) > self.ttl
    }

    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    #[must_use]
    pub const fn stored_at(&self) -> Instant {
        self.stored_at
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_running_backwards_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::new((), now + Duration::from_secs(5), Duration::ZERO);
        assert!(!entry.is_expired(now));
    }
}
