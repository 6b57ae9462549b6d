//! LRU cache for parsed git objects.

use std::num::NonZeroUsize;

use git_hash::ObjectId;
use lru::LruCache;

use crate::Object;

/// LRU cache for parsed objects.
pub struct ObjectCache {
    cache: LruCache<ObjectId, Object>,
}

impl ObjectCache {
    /// Create with the given capacity (number of objects).
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap()),
            ),
        }
    }

    /// Get a cached object (promotes it to most-recently-used).
    pub fn get(&mut self, oid: &ObjectId) -> Option<&Object> {
        self.cache.get(oid)
    }

    /// Peek at a cached object without promoting it.
    pub fn peek(&self, oid: &ObjectId) -> Option<&Object> {
        self.cache.peek(oid)
    }

    /// Insert an object into the cache. Returns the evicted entry if the cache was full.
    pub fn insert(&mut self, oid: ObjectId, obj: Object) -> Option<(ObjectId, Object)> {
        self.cache.push(oid, obj)
    }

    /// Clear all cached objects.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Current number of cached objects.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Check if an OID is in the cache (without promoting).
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.cache.contains(oid)
    }
}
