//! Bounded recency cache for merged class lists.
//!
//! A classic linked-list LRU: nodes live in a slab, a hash index maps keys
//! to slab slots, and recency is a doubly linked list threaded through the
//! slab by index. Reads and writes both promote the touched key to the
//! most-recent end; overflow drops the least-recent entry.
//!
//! A capacity of `0` disables the cache: reads miss and writes are no-ops.
//! The cache itself is single-threaded; [`crate::Merger`] wraps it in a
//! mutex.

use log::trace;
use rustc_hash::FxHashMap;

#[derive(Debug)]
struct Node {
    key: String,
    value: String,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Bounded key→value cache with move-to-front recency.
#[derive(Debug)]
pub struct LruCache {
    capacity: usize,
    index: FxHashMap<String, usize>,
    nodes: Vec<Node>,
    free: Vec<usize>,
    /// Most recently used.
    head: Option<usize>,
    /// Least recently used.
    tail: Option<usize>,
}

impl LruCache {
    pub fn new(capacity: usize) -> Self {
        LruCache {
            capacity,
            index: FxHashMap::default(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The configured bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Looks up `key`, promoting it to most-recent on a hit.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let slot = *self.index.get(key)?;
        self.promote(slot);
        Some(self.nodes[slot].value.as_str())
    }

    /// Inserts or updates `key`, promoting it to most-recent. Evicts the
    /// least-recent entry on overflow. No-op when the cache is disabled.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        let key = key.into();
        if let Some(&slot) = self.index.get(key.as_str()) {
            self.nodes[slot].value = value.into();
            self.promote(slot);
            return;
        }

        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Node {
                    key: key.clone(),
                    value: value.into(),
                    prev: None,
                    next: None,
                };
                slot
            }
            None => {
                self.nodes.push(Node {
                    key: key.clone(),
                    value: value.into(),
                    prev: None,
                    next: None,
                });
                self.nodes.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.push_front(slot);

        while self.index.len() > self.capacity {
            self.evict();
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Changes the bound, dropping least-recent entries on shrink.
    /// Resizing to `0` clears and disables the cache.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.index.len() > self.capacity {
            self.evict();
        }
    }

    fn evict(&mut self) {
        let Some(tail) = self.tail else { return };
        trace!("cache evict: {}", self.nodes[tail].key);
        self.unlink(tail);
        let key = std::mem::take(&mut self.nodes[tail].key);
        self.nodes[tail].value = String::new();
        self.index.remove(&key);
        self.free.push(tail);
    }

    fn promote(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.push_front(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[slot].prev = None;
        self.nodes[slot].next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = None;
        self.nodes[slot].next = self.head;
        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_empty_misses() {
        let mut cache = LruCache::new(4);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn put_then_get_round_trips() {
        let mut cache = LruCache::new(4);
        cache.put("a", "1");
        assert_eq!(cache.get("a"), Some("1"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn overflow_drops_least_recent() {
        let mut cache = LruCache::new(2);
        cache.put("a", "1");
        cache.put("b", "2");
        cache.put("c", "3");
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("2"));
        assert_eq!(cache.get("c"), Some("3"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn read_promotes_entry() {
        let mut cache = LruCache::new(2);
        cache.put("a", "1");
        cache.put("b", "2");
        cache.get("a");
        cache.put("c", "3");
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some("1"));
    }

    #[test]
    fn put_existing_updates_and_promotes() {
        let mut cache = LruCache::new(2);
        cache.put("a", "1");
        cache.put("b", "2");
        cache.put("a", "10");
        cache.put("c", "3");
        assert_eq!(cache.get("a"), Some("10"));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_disables() {
        let mut cache = LruCache::new(0);
        cache.put("a", "1");
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn resize_shrinks_from_least_recent() {
        let mut cache = LruCache::new(4);
        for (k, v) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")] {
            cache.put(k, v);
        }
        cache.get("a");
        cache.resize(2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some("1"));
        assert_eq!(cache.get("d"), Some("4"));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), None);
    }

    #[test]
    fn resize_to_zero_disables() {
        let mut cache = LruCache::new(2);
        cache.put("a", "1");
        cache.resize(0);
        assert_eq!(cache.len(), 0);
        cache.put("b", "2");
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = LruCache::new(2);
        cache.put("a", "1");
        cache.put("b", "2");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
        cache.put("c", "3");
        assert_eq!(cache.get("c"), Some("3"));
    }

    #[test]
    fn slots_are_reused_after_eviction() {
        let mut cache = LruCache::new(2);
        for i in 0..100 {
            cache.put(format!("k{i}"), format!("v{i}"));
        }
        assert_eq!(cache.len(), 2);
        assert!(cache.nodes.len() <= 3);
    }
}
