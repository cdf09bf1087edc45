//! TTL cache for ranked search results.
//!
//! A typed map from normalized query to a timestamped result set.
//! Expiry is lazy: a stale entry is treated as absent on read and stays
//! in the map until a successful search overwrites it. The lock is
//! never held across an await point, so readers always observe a fully
//! written entry.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::types::SearchResult;

/// A cached result set with its creation time.
#[derive(Debug, Clone)]
struct CacheEntry {
    created_at: Instant,
    results: Vec<SearchResult>,
}

/// In-memory TTL store mapping normalized queries to ranked results.
#[derive(Debug)]
pub struct ResultCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

/// Normalize a query into its cache key: trimmed and lowercased.
pub fn cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}

impl ResultCache {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a live entry for `query`.
    ///
    /// Returns `None` on a miss or when the entry has outlived the TTL;
    /// stale entries are not evicted here.
    pub fn get(&self, query: &str) -> Option<Vec<SearchResult>> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries
            .get(&cache_key(query))
            .filter(|entry| entry.created_at.elapsed() < self.ttl)
            .map(|entry| entry.results.clone())
    }

    /// Store `results` for `query`, overwriting any previous entry.
    pub fn insert(&self, query: &str, results: Vec<SearchResult>) {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(
            cache_key(query),
            CacheEntry {
                created_at: Instant::now(),
                results,
            },
        );
    }

    /// Number of entries currently held, live or stale.
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// True when the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_results(title: &str) -> Vec<SearchResult> {
        vec![SearchResult {
            title: title.to_owned(),
            content: "content".into(),
            url: "https://example.com".into(),
            score: 0.5,
        }]
    }

    #[test]
    fn cache_key_lowercases_and_trims() {
        assert_eq!(cache_key("  Foo "), "foo");
        assert_eq!(cache_key("foo"), "foo");
        assert_eq!(cache_key("云主机"), "云主机");
    }

    #[test]
    fn miss_returns_none() {
        let cache = ResultCache::new(Duration::from_secs(60));
        assert!(cache.get("anything").is_none());
    }

    #[test]
    fn insert_and_retrieve() {
        let cache = ResultCache::new(Duration::from_secs(60));
        cache.insert("query", make_results("cached"));
        let hit = cache.get("query").expect("should hit");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "cached");
    }

    #[test]
    fn lookup_uses_normalized_key() {
        let cache = ResultCache::new(Duration::from_secs(60));
        cache.insert("  Foo ", make_results("normalized"));
        let hit = cache.get("foo").expect("normalized key should hit");
        assert_eq!(hit[0].title, "normalized");
    }

    #[test]
    fn zero_ttl_entry_is_born_stale() {
        let cache = ResultCache::new(Duration::ZERO);
        cache.insert("query", make_results("stale"));
        assert!(cache.get("query").is_none());
    }

    #[test]
    fn stale_entry_remains_until_overwritten() {
        let cache = ResultCache::new(Duration::ZERO);
        cache.insert("query", make_results("stale"));
        // Treated as a miss, but not evicted.
        assert!(cache.get("query").is_none());
        assert_eq!(cache.len(), 1);

        // A new successful search overwrites in place.
        cache.insert("query", make_results("fresh"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn overwrite_replaces_results() {
        let cache = ResultCache::new(Duration::from_secs(60));
        cache.insert("query", make_results("old"));
        cache.insert("query", make_results("new"));
        let hit = cache.get("query").expect("should hit");
        assert_eq!(hit[0].title, "new");
    }

    #[test]
    fn distinct_queries_cached_independently() {
        let cache = ResultCache::new(Duration::from_secs(60));
        cache.insert("a", make_results("result a"));
        cache.insert("b", make_results("result b"));
        assert_eq!(cache.get("a").expect("a")[0].title, "result a");
        assert_eq!(cache.get("b").expect("b")[0].title, "result b");
        assert_eq!(cache.len(), 2);
    }
}
