//! Mini LRU - A bounded in-process key-value cache
//!
//! Keeps at most a fixed number of string entries and evicts the least
//! recently used one when a new key needs room.
//!
//! - [`LruCache`] is thread-safe; every operation holds one exclusive lock.
//! - [`LruStore`] is the unsynchronized engine for single-owner use.
//!
//! `add` is insert-only: it never overwrites an existing key. A successful
//! `get` promotes the key to most recently used.
//!
//! ```rust
//! use mini_lru::{CacheError, LruCache};
//!
//! let cache = LruCache::new(3).unwrap();
//! cache.add("One", "1");
//! cache.add("Two", "2");
//! cache.add("Three", "3");
//!
//! assert_eq!(cache.remove_front(), Ok("Three".to_string()));
//! assert_eq!(cache.remove_back(), Ok("One".to_string()));
//! assert_eq!(cache.keys(), vec!["Two"]);
//!
//! cache.remove_back().unwrap();
//! assert_eq!(cache.remove_back(), Err(CacheError::EmptyCache));
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, LruCache, LruStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
