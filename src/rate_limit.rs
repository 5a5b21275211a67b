use dashmap::DashMap;
use std::time::{Duration, Instant};

// Per-identity sliding log of request timestamps.
//
// Each admission check purges entries older than the window before counting,
// so an identity holds at most `max_requests` timestamps at steady state.
// Rejected attempts are never recorded. The purge-count-append sequence runs
// while holding the identity's map entry, so two concurrent requests for the
// same identity cannot both slip past the quota.
pub struct RateLimiter {
    usage: DashMap<String, Vec<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            usage: DashMap::new(),
            max_requests,
            window,
        }
    }

    // Admit or reject one attempt for `identity` as of `now`.
    pub fn try_admit(&self, identity: &str, now: Instant) -> bool {
        let mut log = self.usage.entry(identity.to_string()).or_default();

        // Drop everything that has aged out of the window
        log.retain(|&t| now.duration_since(t) < self.window);

        if log.len() >= self.max_requests {
            return false;
        }

        log.push(now);
        true
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn window_seconds(&self) -> u64 {
        self.window.as_secs()
    }
}
