//! Growth policy for sequence reallocation.

use super::{Config, parse_env_var};
use crate::error::{Result, ViewkitError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capacity growth rule applied when an append exceeds a view's capacity.
///
/// Below `doubling_threshold` the capacity doubles; from there on it grows by
/// `large_growth_percent` percent. The result is never smaller than the
/// length the append requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPolicy {
    /// Capacities below this value double on reallocation
    pub doubling_threshold: usize,
    /// Percentage added to capacities at or above the threshold (1..=100)
    pub large_growth_percent: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            doubling_threshold: 256,
            large_growth_percent: 25,
        }
    }
}

impl GrowthPolicy {
    /// Capacity to allocate when `required` elements must fit and the current
    /// allocation holds `current`.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        if required <= current {
            return current;
        }
        let grown = if current == 0 {
            required
        } else if current < self.doubling_threshold {
            current.saturating_mul(2)
        } else {
            let pct = self.large_growth_percent;
            let extra = (current / 100)
                .saturating_mul(pct)
                .saturating_add(current % 100 * pct / 100)
                .max(1);
            current.saturating_add(extra)
        };
        grown.max(required)
    }
}

impl Config for GrowthPolicy {
    fn validate(&self) -> Result<()> {
        if self.large_growth_percent == 0 || self.large_growth_percent > 100 {
            return Err(ViewkitError::configuration(format!(
                "large growth percent must be between 1 and 100, got {}",
                self.large_growth_percent
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.doubling_threshold = parse_env_var(
            &format!("{}SEQ_DOUBLING_THRESHOLD", prefix),
            config.doubling_threshold,
        );
        config.large_growth_percent = parse_env_var(
            &format!("{}SEQ_LARGE_GROWTH_PERCENT", prefix),
            config.large_growth_percent,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self { doubling_threshold: 4096, large_growth_percent: 50 }
    }

    fn memory_preset() -> Self {
        Self { doubling_threshold: 64, large_growth_percent: 12 }
    }

    fn realtime_preset() -> Self {
        Self { doubling_threshold: 1024, large_growth_percent: 25 }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| ViewkitError::configuration(format!("Failed to serialize growth policy: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ViewkitError::configuration(format!("Failed to parse growth policy file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling_below_threshold() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(5, 6), 10);
        assert_eq!(policy.next_capacity(128, 129), 256);
    }

    #[test]
    fn test_quarter_growth_above_threshold() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(256, 257), 320);
        assert_eq!(policy.next_capacity(1000, 1001), 1250);
    }

    #[test]
    fn test_never_below_required() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0, 7), 7);
        assert_eq!(policy.next_capacity(2, 9), 9);
        assert_eq!(policy.next_capacity(300, 1000), 1000);
    }

    #[test]
    fn test_no_growth_when_it_fits() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(10, 10), 10);
        assert_eq!(policy.next_capacity(10, 3), 10);
    }

    #[test]
    fn test_small_percent_still_grows() {
        let policy = GrowthPolicy { doubling_threshold: 0, large_growth_percent: 1 };
        assert_eq!(policy.next_capacity(10, 11), 11);
        assert_eq!(policy.next_capacity(50, 51), 51);
    }

    #[test]
    fn test_huge_capacity_saturates() {
        let policy = GrowthPolicy::default();
        let next = policy.next_capacity(usize::MAX - 1, usize::MAX);
        assert_eq!(next, usize::MAX);
    }
}
