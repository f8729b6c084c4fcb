//! Time-bounded response cache.
//!
//! The upstream API updates slowly, so a successful body fetched for a URL
//! may be reused for up to the revalidation window before a fresh fetch is
//! required. Expired entries are dropped on lookup; the key space is
//! bounded (the fixed page URLs plus one morning-chart URL per
//! minute-granular base offset) but not tiny, so stale entries are not
//! left behind.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Default revalidation window.
pub const REVALIDATE_WINDOW: Duration = Duration::from_secs(300);

pub struct ResponseCache {
    window: Duration,
    entries: Mutex<HashMap<String, (Instant, String)>>,
}

impl ResponseCache {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a body cached for `url`, if still within the window.
    /// An expired entry is removed rather than left to linger.
    pub async fn get(&self, url: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        match entries.get(url) {
            Some((fetched_at, body)) if fetched_at.elapsed() < self.window => Some(body.clone()),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    /// Store a freshly fetched body for `url`.
    pub async fn put(&self, url: &str, body: String) {
        let mut entries = self.entries.lock().await;
        entries.insert(url.to_string(), (Instant::now(), body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_entry_is_served() {
        let cache = ResponseCache::new(Duration::from_secs(300));
        cache.put("a", "[1]".to_string()).await;
        assert_eq!(cache.get("a").await.as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn test_expired_entry_is_not_served() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.put("a", "[1]".to_string()).await;
        assert_eq!(cache.get("a").await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped_on_lookup() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.put("a", "[1]".to_string()).await;
        assert_eq!(cache.get("a").await, None);
        assert!(cache.entries.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_url_misses() {
        let cache = ResponseCache::new(Duration::from_secs(300));
        assert_eq!(cache.get("b").await, None);
    }

    #[tokio::test]
    async fn test_put_replaces_entry() {
        let cache = ResponseCache::new(Duration::from_secs(300));
        cache.put("a", "[1]".to_string()).await;
        cache.put("a", "[2]".to_string()).await;
        assert_eq!(cache.get("a").await.as_deref(), Some("[2]"));
    }
}
