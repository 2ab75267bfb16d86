//! Map construction configuration.

use super::{Config, parse_env_var};
use crate::error::{Result, ViewkitError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest capacity hint accepted before a map is built.
pub const MAX_CAPACITY_HINT: usize = u32::MAX as usize;

/// Settings a [`Map`](crate::Map) is created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Number of entries to reserve up front
    pub capacity_hint: usize,
    /// Release the reserved table on `clear` instead of keeping it
    pub shrink_on_clear: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            capacity_hint: 0,
            shrink_on_clear: false,
        }
    }
}

impl MapConfig {
    /// Config reserving room for `capacity_hint` entries
    pub fn with_capacity_hint(capacity_hint: usize) -> Self {
        Self {
            capacity_hint,
            ..Self::default()
        }
    }
}

impl Config for MapConfig {
    fn validate(&self) -> Result<()> {
        if self.capacity_hint > MAX_CAPACITY_HINT {
            return Err(ViewkitError::configuration(format!(
                "capacity hint must not exceed {}, got {}",
                MAX_CAPACITY_HINT, self.capacity_hint
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.capacity_hint =
            parse_env_var(&format!("{}MAP_CAPACITY_HINT", prefix), config.capacity_hint);
        config.shrink_on_clear = super::parse_env_bool(
            &format!("{}MAP_SHRINK_ON_CLEAR", prefix),
            config.shrink_on_clear,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self { capacity_hint: 1024, shrink_on_clear: false }
    }

    fn memory_preset() -> Self {
        Self { capacity_hint: 0, shrink_on_clear: true }
    }

    fn realtime_preset() -> Self {
        Self { capacity_hint: 256, shrink_on_clear: false }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| ViewkitError::configuration(format!("Failed to serialize map config: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ViewkitError::configuration(format!("Failed to parse map config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
