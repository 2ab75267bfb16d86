//! Hash map with zero-value-on-miss semantics
//!
//! [`Map`] wraps a standard `HashMap` using AHash and turns every lookup into a
//! total operation: a miss yields the value type's default plus a presence flag.

mod map;

pub use map::Map;

/// Hasher builder used by [`Map`] unless another is supplied
pub use ahash::RandomState;
