//! Cache Module
//!
//! Provides a bounded key-value cache with strict LRU eviction.

mod list;
mod record;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use shared::LruCache;
pub use stats::CacheStats;
pub use store::LruStore;
