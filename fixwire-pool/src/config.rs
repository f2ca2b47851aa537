/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Pool configuration.
//!
//! This module provides sizing and exhaustion options for a
//! [`MessagePool`](crate::MessagePool).

use std::num::NonZeroUsize;
use tracing::warn;

/// Environment variable overriding the pool capacity.
pub const CAPACITY_ENV: &str = "FIXWIRE_POOL_CAPACITY";

/// Environment variable overriding the exhaustion policy.
pub const EXHAUSTION_ENV: &str = "FIXWIRE_POOL_EXHAUSTION";

/// What `acquire` does when every pooled message is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExhaustionPolicy {
    /// Allocate a fresh message. Surplus messages released while the pool
    /// is full are dropped, so the pool never holds more than its capacity.
    #[default]
    Grow,
    /// Fail with `PoolError::Exhausted`.
    Reject,
    /// Wait until another thread releases a message.
    ///
    /// A thread that already holds every message and acquires again waits
    /// forever.
    Block,
}

impl ExhaustionPolicy {
    /// Parses a policy name (`grow`, `reject`, or `block`, any case).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "grow" => Some(Self::Grow),
            "reject" => Some(Self::Reject),
            "block" => Some(Self::Block),
            _ => None,
        }
    }
}

/// Configuration for a message pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of messages created up front and retained.
    pub capacity: usize,
    /// Behavior when every message is in use.
    pub exhaustion: ExhaustionPolicy,
}

impl PoolConfig {
    /// Creates a configuration sized to the available hardware parallelism,
    /// growing on exhaustion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
            exhaustion: ExhaustionPolicy::Grow,
        }
    }

    /// Creates the default configuration overridden by `FIXWIRE_POOL_CAPACITY`
    /// and `FIXWIRE_POOL_EXHAUSTION`. Unparsable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates the default configuration overridden by the values `lookup`
    /// returns for the pool environment variable names.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(raw) = lookup(CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.capacity = capacity,
                _ => warn!(value = %raw, "ignoring invalid {}", CAPACITY_ENV),
            }
        }

        if let Some(raw) = lookup(EXHAUSTION_ENV) {
            match ExhaustionPolicy::from_name(&raw) {
                Some(policy) => config.exhaustion = policy,
                None => warn!(value = %raw, "ignoring invalid {}", EXHAUSTION_ENV),
            }
        }

        config
    }

    /// Sets the capacity. Zero is raised to one.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Sets the exhaustion policy.
    #[must_use]
    pub const fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.exhaustion = exhaustion;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_defaults() {
        let config = PoolConfig::default();
        assert!(config.capacity >= 1);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Grow);
    }

    #[test]
    fn test_pool_config_builder() {
        let config = PoolConfig::new()
            .with_capacity(0)
            .with_exhaustion(ExhaustionPolicy::Reject);
        assert_eq!(config.capacity, 1);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Reject);
    }

    #[test]
    fn test_exhaustion_policy_from_name() {
        assert_eq!(ExhaustionPolicy::from_name("grow"), Some(ExhaustionPolicy::Grow));
        assert_eq!(ExhaustionPolicy::from_name(" Block "), Some(ExhaustionPolicy::Block));
        assert_eq!(ExhaustionPolicy::from_name("REJECT"), Some(ExhaustionPolicy::Reject));
        assert_eq!(ExhaustionPolicy::from_name("spin"), None);
    }

    #[test]
    fn test_pool_config_from_lookup() {
        let config = PoolConfig::from_lookup(|key| match key {
            CAPACITY_ENV => Some("12".to_string()),
            EXHAUSTION_ENV => Some("block".to_string()),
            _ => None,
        });
        assert_eq!(config.capacity, 12);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Block);
    }

    #[test]
    fn test_pool_config_from_lookup_ignores_invalid() {
        let defaults = PoolConfig::new();
        let config = PoolConfig::from_lookup(|key| match key {
            CAPACITY_ENV => Some("0".to_string()),
            EXHAUSTION_ENV => Some("spin".to_string()),
            _ => None,
        });
        assert_eq!(config, defaults);
    }
}
