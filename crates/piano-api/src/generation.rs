//! Request generations.
//!
//! Overlapping refreshes of the same view can complete out of order. Each
//! refresh takes a [`Generation`] when it starts; [`Latest::apply`] keeps a
//! result only if nothing newer has already been applied.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying when a request was issued. Larger is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing [`Generation`]s. Safe to share across tasks.
#[derive(Debug, Default)]
pub struct Generations {
    next: AtomicU64,
}

impl Generations {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> Generation {
        Generation(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// The most recently issued value seen so far.
#[derive(Debug)]
pub struct Latest<T> {
    applied: Option<(Generation, T)>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self { applied: None }
    }
}

impl<T> Latest<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { applied: None }
    }

    /// Keep `value` unless a value from a newer generation is already held.
    /// Returns whether `value` was kept.
    pub fn apply(&mut self, generation: Generation, value: T) -> bool {
        if let Some((current, _)) = &self.applied
            && *current > generation
        {
            tracing::debug!(
                stale = generation.get(),
                current = current.get(),
                "discarding stale response"
            );
            return false;
        }
        self.applied = Some((generation, value));
        true
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.applied.as_ref().map(|(_, value)| value)
    }

    #[must_use]
    pub fn generation(&self) -> Option<Generation> {
        self.applied.as_ref().map(|(generation, _)| *generation)
    }
}
