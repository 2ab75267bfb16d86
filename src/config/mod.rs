//! Configuration APIs for viewkit
//!
//! Two knobs are exposed: the [`GrowthPolicy`] a [`Seq`](crate::Seq) uses when
//! an append has to reallocate, and the [`MapConfig`] a
//! [`Map`](crate::Map) is created from.
//!
//! # Preset Configurations
//!
//! ```rust
//! use viewkit::config::{Config, GrowthPolicy};
//!
//! let policy = GrowthPolicy::performance_preset();
//! assert!(policy.validate().is_ok());
//! assert_eq!(policy.next_capacity(8, 9), 16);
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use viewkit::config::{Config, MapConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads VIEWKIT_MAP_CAPACITY_HINT, falling back to the default
//! let config = MapConfig::from_env()?;
//! # let _ = config;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod growth;
pub mod map;


pub use growth::GrowthPolicy;
pub use map::MapConfig;

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from `VIEWKIT_`-prefixed environment variables.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("VIEWKIT_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default value. The result is
    /// validated before it is returned.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favouring fewer reallocations over memory footprint.
    fn performance_preset() -> Self;

    /// Preset favouring a tight memory footprint.
    fn memory_preset() -> Self;

    /// Preset favouring predictable per-operation cost.
    fn realtime_preset() -> Self;

    /// Balanced preset, the default.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse environment variable with fallback to default.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
