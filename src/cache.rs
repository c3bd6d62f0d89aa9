//! Time-bounded memoization of analysis results
//!
//! Entries are keyed by a content fingerprint and replaced wholesale on
//! write; a stale entry is evicted on the next lookup that touches it.

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};

pub struct ResultCache<T: Clone> {
    entries: DashMap<String, (T, Instant)>,
    ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
}

impl<T: Clone> ResultCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        if let Some(entry) = self.entries.get(key) {
            if entry.1.elapsed() <= self.ttl {
                return Some(entry.0.clone());
            }
        }
        self.entries.remove(key);
        None
    }

    pub fn put(&self, key: String, value: T) {
        self.entries.insert(key, (value, Instant::now()));
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
        }
    }
}

/// Stable hex fingerprint over the given parts. Each part is length-prefixed
/// so adjacent parts cannot alias ("ab","c" vs "a","bc").
pub fn fingerprint(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let cache: ResultCache<String> = ResultCache::new(Duration::from_secs(60));
        cache.put("k".to_string(), "v".to_string());

        assert_eq!(cache.get("k"), Some("v".to_string()));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache: ResultCache<u32> = ResultCache::new(Duration::from_millis(0));
        cache.put("k".to_string(), 7);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let cache: ResultCache<u32> = ResultCache::new(Duration::from_secs(60));
        cache.put("k".to_string(), 1);
        cache.put("k".to_string(), 2);

        assert_eq!(cache.get("k"), Some(2));
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_fingerprint_is_stable_and_unambiguous() {
        assert_eq!(fingerprint(&["a", "b"]), fingerprint(&["a", "b"]));
        assert_ne!(fingerprint(&["ab", "c"]), fingerprint(&["a", "bc"]));
        assert_ne!(fingerprint(&["a"]), fingerprint(&["b"]));
    }
}
