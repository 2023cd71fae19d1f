//! Shared Cache Module
//!
//! Thread-safe LRU cache: an [`LruStore`] behind a single exclusive lock.

use parking_lot::Mutex;

use crate::cache::{CacheStats, LruStore};
use crate::config::CacheConfig;
use crate::error::Result;

// == LRU Cache ==
/// Bounded, thread-safe key-value cache with least-recently-used eviction.
///
/// Every operation, including reads, holds one mutex for its whole duration,
/// so no caller can observe a key present in the index but missing from the
/// recency order or the reverse. Share it between threads with `Arc`.
///
/// The lock is not re-entrant.
///
/// # Examples
///
/// ```rust
/// use mini_lru::LruCache;
///
/// let cache = LruCache::new(2).unwrap();
/// cache.add("One", "1");
/// cache.add("Two", "2");
/// cache.add("Three", "3");
///
/// assert_eq!(cache.keys(), vec!["Three", "Two"]);
/// assert_eq!(cache.get("One"), None);
/// ```
#[derive(Debug)]
pub struct LruCache {
    inner: Mutex<LruStore>,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_store(LruStore::new(capacity)?))
    }

    /// Creates a cache from validated configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Wraps an existing store, keeping its entries and counters.
    pub fn from_store(store: LruStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    // == Add ==
    /// Inserts a new entry as most recently used.
    ///
    /// Returns false, leaving the cache untouched, if `key` already exists.
    /// May evict the least recently used entry to stay within capacity.
    pub fn add(&self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.inner.lock().add(key, value)
    }

    // == Get ==
    /// Returns a copy of the value for `key` and marks it most recently used.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_owned)
    }

    /// Returns a copy of the value for `key` without promoting it.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().peek(key).map(str::to_owned)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    // == Remove ==
    /// Removes `key`. Returns false if it was absent.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    /// Removes the most recently used entry and returns its key.
    ///
    /// # Errors
    /// Returns [`CacheError::EmptyCache`](crate::CacheError::EmptyCache) if the
    /// cache holds no entries.
    pub fn remove_front(&self) -> Result<String> {
        self.inner.lock().remove_front()
    }

    /// Removes the least recently used entry and returns its key.
    ///
    /// # Errors
    /// Returns [`CacheError::EmptyCache`](crate::CacheError::EmptyCache) if the
    /// cache holds no entries.
    pub fn remove_back(&self) -> Result<String> {
        self.inner.lock().remove_back()
    }

    // == Keys ==
    /// Returns a snapshot of all keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Consumes the cache and returns the underlying store.
    pub fn into_store(self) -> LruStore {
        self.inner.into_inner()
    }
}
