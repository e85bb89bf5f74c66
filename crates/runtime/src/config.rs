//! Session configuration.

use blockfall_core::SpeedConfig;

/// Default PRNG seed when none is given
pub const DEFAULT_SEED: u32 = 47583;

/// Default capacity of the pending-action queue
pub const DEFAULT_INPUT_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub speed: SpeedConfig,
    pub input_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            speed: SpeedConfig::default(),
            input_buffer: DEFAULT_INPUT_BUFFER,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SessionConfig::from_env`] but reading from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            default: T,
        ) -> T {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        }

        let defaults = Self::default();
        Self {
            seed: parsed(&lookup, "BLOCKFALL_SEED", defaults.seed),
            speed: SpeedConfig {
                base_ms: parsed(&lookup, "BLOCKFALL_BASE_TICK_MS", defaults.speed.base_ms),
                step_ms: parsed(&lookup, "BLOCKFALL_TICK_STEP_MS", defaults.speed.step_ms),
                min_ms: parsed(&lookup, "BLOCKFALL_MIN_TICK_MS", defaults.speed.min_ms),
            },
            input_buffer: parsed(&lookup, "BLOCKFALL_INPUT_BUFFER", defaults.input_buffer).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_values() {
        let vars: HashMap<&str, &str> = [
            ("BLOCKFALL_SEED", "12"),
            ("BLOCKFALL_BASE_TICK_MS", " 800 "),
            ("BLOCKFALL_MIN_TICK_MS", "50"),
        ]
        .into_iter()
        .collect();
        let config = SessionConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.seed, 12);
        assert_eq!(config.speed.base_ms, 800);
        assert_eq!(config.speed.step_ms, SpeedConfig::default().step_ms);
        assert_eq!(config.speed.min_ms, 50);
    }

    #[test]
    fn test_from_lookup_falls_back_on_garbage() {
        let config = SessionConfig::from_lookup(|k| match k {
            "BLOCKFALL_SEED" => Some("not-a-number".to_string()),
            "BLOCKFALL_INPUT_BUFFER" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.input_buffer, 1);
    }
}
