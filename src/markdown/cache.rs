//! Memoization cache for block extraction
//!
//! Caches extracted blocks keyed by a hash of the input content.
//! When the same content is requested, returns cached blocks instead of re-parsing.

use std::collections::{HashMap, VecDeque};
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::markdown::{extract_blocks, ContentBlock, BLOCK_CACHE_MAX_ENTRIES};

/// Memoization cache for block extraction.
///
/// A message list re-extracts every visible message on each redraw, but
/// only the message being streamed actually changes. Completed messages hit
/// the cache and are never parsed twice.
pub struct BlockCache {
    /// Cache entries keyed by content hash
    entries: HashMap<u64, Vec<ContentBlock>>,
    /// Content hashes, oldest at the front
    insertion_order: VecDeque<u64>,
    /// Entry limit; the oldest entry goes once it is reached
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for BlockCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCache {
    /// Create a new empty block cache holding up to `BLOCK_CACHE_MAX_ENTRIES`
    pub fn new() -> Self {
        Self::with_capacity(BLOCK_CACHE_MAX_ENTRIES)
    }

    /// Create a cache with a custom entry limit (at least one entry)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    fn hash_content(content: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        hasher.finish()
    }

    /// Extract blocks with caching.
    ///
    /// If the content has been extracted before, returns the cached result.
    /// Otherwise, parses the markdown, caches the result, and returns it.
    pub fn extract(&mut self, content: &str) -> Vec<ContentBlock> {
        let hash = Self::hash_content(content);

        if let Some(cached) = self.entries.get(&hash) {
            self.hits += 1;
            return cached.clone();
        }

        self.misses += 1;
        let blocks = extract_blocks(content);

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            tracing::trace!(hash = oldest, "evicted block cache entry");
        }

        self.entries.insert(hash, blocks.clone());
        self.insertion_order.push_back(hash);

        blocks
    }

    /// Check whether blocks for this content are cached, without touching stats
    pub fn contains(&self, content: &str) -> bool {
        self.entries.contains_key(&Self::hash_content(content))
    }

    /// Get cache statistics (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Get the number of entries currently in the cache
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry limit of this cache
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all entries from the cache
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
        // Stats survive a clear
    }

    /// Invalidate a specific content entry
    pub fn invalidate(&mut self, content: &str) {
        let hash = Self::hash_content(content);
        if self.entries.remove(&hash).is_some() {
            self.insertion_order.retain(|&h| h != hash);
        }
    }
}
