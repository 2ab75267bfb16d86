//! Map - hash map with zero-value-on-miss lookups
//!
//! Every operation is total. Looking up a missing key yields the value type's
//! default together with a presence flag, and read-modify-write updates treat
//! a missing key as holding that default.
//!
//! # Examples
//!
//! ```rust
//! use viewkit::Map;
//!
//! let mut ages: Map<&str, i32> = Map::with_capacity(5);
//! ages.set("Juan", 25);
//!
//! assert_eq!(ages.get(&"Juan"), (25, true));
//! assert_eq!(ages.get(&"Maria"), (0, false));
//!
//! ages.increment_by("Maria", 1);
//! assert_eq!(ages.value(&"Maria"), 1);
//! ```

use crate::config::{Config, MapConfig};
use crate::error::Result;
use ahash::RandomState;
use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::AddAssign;

/// Hash map whose lookups never fail
pub struct Map<K, V, S = RandomState> {
    inner: HashMap<K, V, S>,
    config: MapConfig,
}

impl<K, V> Map<K, V, RandomState> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K: Hash + Eq, V> Map<K, V, RandomState> {
    /// Create an empty map with room for `capacity_hint` entries
    ///
    /// The hint is advisory: a hint that cannot be reserved yields an empty
    /// map without reserved room.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::reserved(MapConfig::with_capacity_hint(capacity_hint))
    }

    /// Create an empty map from a validated configuration
    pub fn with_config(config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::reserved(config))
    }

    fn reserved(config: MapConfig) -> Self {
        let mut inner: HashMap<K, V, RandomState> = HashMap::with_hasher(RandomState::new());
        if inner.try_reserve(config.capacity_hint).is_err() {
            log::debug!("map capacity hint {} not reserved", config.capacity_hint);
        }
        Self { inner, config }
    }
}

impl<K, V, S> Map<K, V, S> {
    /// Create an empty map using `hash_builder`
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hash_builder),
            config: MapConfig::default(),
        }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the map has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of entries the map holds without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Configuration the map was created from
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Iterate over entries in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Iterate over keys in unspecified order
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Iterate over values in unspecified order
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.inner.values()
    }
}

impl<K, V, S> Map<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Look up `key`, returning `(value, true)` on a hit and
    /// `(V::default(), false)` on a miss
    pub fn get<Q>(&self, key: &Q) -> (V, bool)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Default + Clone,
    {
        match self.inner.get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    /// Look up `key` without the presence flag
    pub fn value<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Default + Clone,
    {
        self.get(key).0
    }

    /// Borrow the stored value, if any
    pub fn get_ref<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Check if `key` has an entry
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Remove every entry. Idempotent.
    pub fn clear(&mut self) {
        let removed = self.inner.len();
        self.inner.clear();
        if self.config.shrink_on_clear {
            self.inner.shrink_to_fit();
        }
        log::trace!("map cleared: {} entries removed", removed);
    }

    /// Insert or overwrite the entry for `key`
    pub fn set(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Remove the entry for `key`; a missing key is a no-op
    pub fn delete<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key);
    }

    /// Replace the value for `key` with `f(current)`, where a missing key
    /// passes `V::default()`
    pub fn update<F>(&mut self, key: K, f: F)
    where
        F: FnOnce(V) -> V,
        V: Default,
    {
        let slot = self.inner.entry(key).or_default();
        *slot = f(std::mem::take(slot));
    }

    /// Add `delta` to the value for `key`, counting a missing key from zero
    pub fn increment_by(&mut self, key: K, delta: V)
    where
        V: Default + AddAssign,
    {
        *self.inner.entry(key).or_default() += delta;
    }
}

impl<K, V> Default for Map<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for Map<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
        }
    }
}

impl<K, V, S> PartialEq for Map<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V, RandomState> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for Map<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, K, V, S> IntoIterator for &'a Map<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Map<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

/// Entries sorted by key: `map[Hanna:29 Juan:25]`
impl<K, V, S> fmt::Display for Map<K, V, S>
where
    K: fmt::Display + Ord,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.inner.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "map[")?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        write!(f, "]")
    }
}
