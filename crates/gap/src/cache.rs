//! LRU cache with per-entry TTL, shared by every gap adapter. A timed-out
//! lookup still returns a stale hit if one is cached, per §4.8's "timeout
//! wrapper that on expiry returns a stale cached hit if available".

use lru::LruCache;
use parking_lot::Mutex;
use research_core::CandidateSource;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

struct Entry {
    value: Vec<CandidateSource>,
    inserted_at: Instant,
}

pub struct TtlCache {
    inner: Mutex<LruCache<String, Entry>>,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_size.max(1)).expect("max_size clamped to >= 1");
        Self { inner: Mutex::new(LruCache::new(capacity)), ttl }
    }

    /// A fresh (non-expired) hit, or `None` if absent or expired.
    pub fn get_fresh(&self, key: &str) -> Option<Vec<CandidateSource>> {
        let mut guard = self.inner.lock();
        let entry = guard.get(key)?;
        if entry.inserted_at.elapsed() <= self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Any cached hit regardless of freshness, used as the stale fallback
    /// when the live call times out.
    pub fn get_stale(&self, key: &str) -> Option<Vec<CandidateSource>> {
        self.inner.lock().get(key).map(|e| e.value.clone())
    }

    pub fn put(&self, key: String, value: Vec<CandidateSource>) {
        self.inner.lock().put(key, Entry { value, inserted_at: Instant::now() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_core::OriginType;

    fn sample() -> Vec<CandidateSource> {
        vec![CandidateSource::new("1", "t", "b", "p", OriginType::PublicNews)]
    }

    #[test]
    fn fresh_hit_is_returned_before_ttl_elapses() {
        let cache = TtlCache::new(8, Duration::from_secs(60));
        cache.put("q".to_string(), sample());
        assert!(cache.get_fresh("q").is_some());
    }

    #[test]
    fn expired_entry_is_not_a_fresh_hit_but_is_a_stale_one() {
        let cache = TtlCache::new(8, Duration::from_millis(1));
        cache.put("q".to_string(), sample());
        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get_fresh("q").is_none());
        assert!(cache.get_stale("q").is_some());
    }

    #[test]
    fn missing_key_has_no_stale_fallback_either() {
        let cache = TtlCache::new(8, Duration::from_secs(60));
        assert!(cache.get_stale("missing").is_none());
    }
}
