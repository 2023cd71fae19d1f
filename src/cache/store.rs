//! Cache Store Module
//!
//! Unsynchronized LRU engine combining a HashMap index with a recency list.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cache::list::RecencyList;
use crate::cache::record::Record;
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == LRU Store ==
/// Bounded key-value storage with strict least-recently-used eviction.
///
/// Every key in `index` owns exactly one node in `order` and every node's key
/// is present in `index`. Callers that share a store across threads should
/// use [`LruCache`](crate::cache::LruCache) instead.
#[derive(Debug)]
pub struct LruStore {
    /// Key to value and list position
    index: HashMap<String, Record>,
    /// Keys from most to least recently used
    order: RecencyList,
    /// Usage counters
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl LruStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        debug!("Creating LRU store with capacity {}", capacity);

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Add ==
    /// Inserts a new key at the front of the recency order.
    ///
    /// Returns false without touching the existing entry's value or recency
    /// if `key` is already present. When the store is full the least recently
    /// used entry is evicted first.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            trace!("Rejected duplicate key: {}", key);
            return false;
        }

        if self.index.len() >= self.capacity {
            self.evict_oldest();
        }

        let position = self.order.push_front(key.clone());
        trace!("Added key: {}", key);
        self.index.insert(key, Record::new(value.into(), position));

        self.check_sizes();
        true
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        match self.index.get(key) {
            Some(record) => {
                self.order.move_to_front(record.position);
                self.stats.record_hit();
                Some(record.value.as_str())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Returns the value for `key` without changing recency or stats.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|record| record.value.as_str())
    }

    /// Checks membership without changing recency or stats.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Remove ==
    /// Removes `key` from the store. Returns false if it was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(record) = self.index.remove(key) else {
            return false;
        };
        self.order.remove(record.position);
        trace!("Removed key: {}", key);

        self.check_sizes();
        true
    }

    // == Remove Front ==
    /// Removes the most recently used entry and returns its key.
    ///
    /// # Errors
    /// Returns [`CacheError::EmptyCache`] if the store holds no entries.
    pub fn remove_front(&mut self) -> Result<String> {
        let key = self.order.pop_front().ok_or(CacheError::EmptyCache)?;
        self.index.remove(&key);
        trace!("Removed front key: {}", key);

        self.check_sizes();
        Ok(key)
    }

    // == Remove Back ==
    /// Removes the least recently used entry and returns its key.
    ///
    /// # Errors
    /// Returns [`CacheError::EmptyCache`] if the store holds no entries.
    pub fn remove_back(&mut self) -> Result<String> {
        let key = self.order.pop_back().ok_or(CacheError::EmptyCache)?;
        self.index.remove(&key);
        trace!("Removed back key: {}", key);

        self.check_sizes();
        Ok(key)
    }

    // == Keys ==
    /// Returns a copy of all keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.order.iter().map(str::to_owned).collect()
    }

    /// Returns the most recently used key.
    pub fn front(&self) -> Option<&str> {
        self.order.front()
    }

    /// Returns the least recently used key, the next eviction candidate.
    pub fn back(&self) -> Option<&str> {
        self.order.back()
    }

    // == Clear ==
    /// Removes every entry. Capacity and counters are preserved.
    pub fn clear(&mut self) {
        debug!("Clearing {} entries", self.index.len());
        self.index.clear();
        self.order.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_oldest(&mut self) {
        if let Some(key) = self.order.pop_back() {
            self.index.remove(&key);
            self.stats.record_eviction();
            debug!("Evicted least recently used key: {}", key);
        }
    }

    fn check_sizes(&self) {
        debug_assert_eq!(self.index.len(), self.order.len());
        debug_assert!(self.index.len() <= self.capacity);
    }

    /// Panics if the index and recency list disagree.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.index.len(), self.order.len());
        assert!(self.index.len() <= self.capacity);
        for (key, record) in &self.index {
            assert_eq!(
                self.order.key(record.position),
                Some(key.as_str()),
                "record position does not point at its own key"
            );
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn store(capacity: usize) -> LruStore {
        LruStore::new(capacity).unwrap()
    }

    #[test]
    fn test_store_new() {
        let store = store(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_store_zero_capacity() {
        assert_eq!(LruStore::new(0).unwrap_err(), CacheError::InvalidCapacity(0));
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = store(100);

        assert!(store.add("key1", "value1"));
        assert_eq!(store.get("key1"), Some("value1"));
        assert_eq!(store.len(), 1);
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = store(100);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_add_is_insert_only() {
        let mut store = store(3);

        assert!(store.add("key1", "value1"));
        assert!(store.add("key2", "value2"));
        assert!(!store.add("key1", "value2"));

        // Value and recency both untouched
        assert_eq!(store.peek("key1"), Some("value1"));
        assert_eq!(store.keys(), vec!["key2", "key1"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_remove() {
        let mut store = store(100);

        store.add("key1", "value1");
        assert!(store.remove("key1"));

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_remove_nonexistent() {
        let mut store = store(100);
        assert!(!store.remove("nonexistent"));
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = store(3);

        store.add("key1", "value1");
        store.add("key2", "value2");
        store.add("key3", "value3");

        // Cache is full, adding key4 should evict key1 (oldest)
        assert!(store.add("key4", "value4"));

        assert_eq!(store.len(), 3);
        assert!(!store.contains("key1"));
        assert_eq!(store.keys(), vec!["key4", "key3", "key2"]);
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut store = store(3);

        store.add("key1", "value1");
        store.add("key2", "value2");
        store.add("key3", "value3");

        // Access key1 to make it most recently used
        store.get("key1");
        assert_eq!(store.front(), Some("key1"));
        assert_eq!(store.back(), Some("key2"));

        // Adding key4 should evict key2 (now oldest)
        store.add("key4", "value4");

        assert!(store.contains("key1"));
        assert!(!store.contains("key2"));
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_peek_does_not_promote() {
        let mut store = store(2);

        store.add("key1", "value1");
        store.add("key2", "value2");
        assert_eq!(store.peek("key1"), Some("value1"));
        assert!(store.contains("key1"));

        store.add("key3", "value3");
        assert!(!store.contains("key1"));
        assert_eq!(store.stats().hits, 0);
    }

    #[test]
    fn test_store_remove_front_and_back() {
        let mut store = store(3);

        store.add("One", "1");
        store.add("Two", "2");
        store.add("Three", "3");

        assert_eq!(store.remove_front(), Ok("Three".to_string()));
        assert_eq!(store.remove_back(), Ok("One".to_string()));
        assert_eq!(store.keys(), vec!["Two"]);
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_remove_front_back_empty() {
        let mut store = store(2);

        assert_eq!(store.remove_front(), Err(CacheError::EmptyCache));
        assert_eq!(store.remove_back(), Err(CacheError::EmptyCache));

        // Store stays usable after the errors
        assert!(store.add("key1", "value1"));
        assert_eq!(store.keys(), vec!["key1"]);
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_stats() {
        let mut store = store(1);

        store.add("key1", "value1");
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.add("key2", "value2"); // evicts key1
        store.remove_back().unwrap(); // explicit removal, not an eviction

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_store_clear() {
        let mut store = store(3);

        store.add("key1", "value1");
        store.add("key2", "value2");
        store.clear();

        assert!(store.is_empty());
        assert!(store.keys().is_empty());
        assert_eq!(store.capacity(), 3);
        assert!(store.add("key3", "value3"));
        store.debug_validate_invariants();
    }

    #[test]
    fn test_store_capacity_one() {
        let mut store = store(1);

        store.add("a", "1");
        store.add("b", "2");
        store.add("c", "3");

        assert_eq!(store.keys(), vec!["c"]);
        assert_eq!(store.stats().evictions, 2);
        store.debug_validate_invariants();
    }
}
