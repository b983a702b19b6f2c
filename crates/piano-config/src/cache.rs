//! Read-cache settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_enabled() -> bool {
    true
}

/// Five minutes.
const fn default_ttl_ms() -> u64 {
    300_000
}

/// One minute.
const fn default_sweep_interval_ms() -> u64 {
    60_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Whether GET responses are cached at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Lifetime of a cached GET response.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// How often long-running commands sweep expired entries. `0` disables the sweep.
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl_ms: default_ttl_ms(),
            sweep_interval_ms: default_sweep_interval_ms(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    #[must_use]
    pub const fn sweep_interval(&self) -> Option<Duration> {
        if self.sweep_interval_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.sweep_interval_ms))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.ttl(), Duration::from_secs(300));
        assert_eq!(config.sweep_interval(), Some(Duration::from_secs(60)));
    }
}
