//! Speed controller - tick period by level

use std::time::Duration;

use crate::types::{BASE_TICK_MS, MIN_TICK_MS, TICK_STEP_MS};

/// Tick period parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedConfig {
    pub base_ms: u32,
    pub step_ms: u32,
    /// Floor; values below 1ms are treated as 1ms.
    pub min_ms: u32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_ms: BASE_TICK_MS,
            step_ms: TICK_STEP_MS,
            min_ms: MIN_TICK_MS,
        }
    }
}

/// Tick period in milliseconds: `base - level * step`, never below the floor.
pub fn tick_period_ms(level: u32, config: &SpeedConfig) -> u32 {
    config
        .base_ms
        .saturating_sub(level.saturating_mul(config.step_ms))
        .max(config.min_ms)
        .max(1)
}

pub fn tick_period(level: u32, config: &SpeedConfig) -> Duration {
    Duration::from_millis(tick_period_ms(level, config) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_by_level() {
        let config = SpeedConfig::default();
        assert_eq!(tick_period_ms(1, &config), 900);
        assert_eq!(tick_period_ms(2, &config), 800);
        assert_eq!(tick_period_ms(5, &config), 500);
    }

    #[test]
    fn test_period_clamped_at_floor() {
        let config = SpeedConfig::default();
        assert_eq!(tick_period_ms(9, &config), 100);
        assert_eq!(tick_period_ms(10, &config), 100);
        assert_eq!(tick_period_ms(u32::MAX, &config), 100);
    }

    #[test]
    fn test_zero_floor_still_positive() {
        let config = SpeedConfig {
            base_ms: 50,
            step_ms: 100,
            min_ms: 0,
        };
        assert_eq!(tick_period_ms(3, &config), 1);
        assert_eq!(tick_period(3, &config), Duration::from_millis(1));
    }
}
