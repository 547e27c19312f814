//! Result cache shared by the memoized solvers.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use log::debug;

/// A call-result cache keyed by the call's arguments.
///
/// A thin wrapper over `HashMap` whose one job is to make cache misses
/// observable: every `insert` logs the key at debug level, so wiring up any
/// `log` backend shows exactly which subproblems a memoized solver actually
/// computed.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    cache: HashMap<K, V>,
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Returns the cached value for `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    /// Stores the computed value for `key`.
    ///
    /// Callers only reach this after a failed `get`, so the insert is where
    /// the miss gets logged.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        debug!("cache miss, storing result for {key:?}");
        self.cache.insert(key, value);
    }

    /// Returns the number of cached results.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops all cached results.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<K, V> Default for Memo<K, V>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
