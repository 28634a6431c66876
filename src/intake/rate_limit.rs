use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MAX_REQUESTS: u32 = 5;
const WINDOW_SECS: u64 = 60;

struct Bucket {
    count: u32,
    window_start: Instant,
}

/// Fixed-window rate limiter keyed by client IP.
///
/// Constructed once per process and injected into the submit handlers as
/// `web::Data<RateLimiter>`. State lives only in this process's memory: it
/// does not survive restarts and is not shared across instances, which is
/// acceptable for a low-traffic single-instance deployment.
#[derive(Clone)]
pub struct RateLimiter {
    buckets: Arc<Mutex<HashMap<String, Bucket>>>,
    max_requests: u32,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter {
    /// Limiter with production defaults: 5 requests per 60-second window.
    pub fn new() -> Self {
        Self::with_limits(MAX_REQUESTS, Duration::from_secs(WINDOW_SECS))
    }

    /// Limiter with explicit limits. Used by tests to shrink the window.
    pub fn with_limits(max_requests: u32, window: Duration) -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Try to admit one request for `key`. Returns `true` and increments the
    /// counter when the key is under its limit; returns `false` without
    /// incrementing once the limit is reached. An expired window resets the
    /// counter before the check.
    pub fn try_acquire(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());

        // Lazy cleanup: drop buckets whose window has expired so the map
        // does not grow with one entry per client forever.
        buckets.retain(|_, b| now.duration_since(b.window_start) <= self.window);

        // An expired key was just evicted, so this entry is either live or
        // a fresh window starting now.
        let bucket = buckets.entry(key.to_string()).or_insert(Bucket {
            count: 0,
            window_start: now,
        });

        if bucket.count >= self.max_requests {
            return false;
        }
        bucket.count += 1;
        true
    }
}

/// Rate-limit key for a request: the first address in `X-Forwarded-For`, or
/// `"unknown"` when the header is absent — all unidentified clients share
/// one bucket.
pub fn client_ip(req: &actix_web::HttpRequest) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_buckets_are_evicted_on_acquire() {
        let limiter = RateLimiter::with_limits(1, Duration::from_millis(50));
        assert!(limiter.try_acquire("203.0.113.1"));
        assert!(limiter.try_acquire("203.0.113.2"));
        assert_eq!(limiter.buckets.lock().unwrap().len(), 2);

        std::thread::sleep(Duration::from_millis(80));

        // Touching one key prunes every expired bucket, not just its own.
        assert!(limiter.try_acquire("203.0.113.3"));
        assert_eq!(limiter.buckets.lock().unwrap().len(), 1);
    }

    #[test]
    fn live_buckets_survive_cleanup() {
        let limiter = RateLimiter::with_limits(2, Duration::from_secs(60));
        assert!(limiter.try_acquire("a"));
        assert!(limiter.try_acquire("b"));
        assert!(limiter.try_acquire("a"));
        assert_eq!(limiter.buckets.lock().unwrap().len(), 2);
        // Counts are preserved across unrelated acquires.
        assert!(!limiter.try_acquire("a"));
    }
}
