// SPDX-License-Identifier: Apache-2.0

use crate::config::RateLimitConfig;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Above this many tracked clients, idle windows are dropped on the next hit.
const MAX_TRACKED_CLIENTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RateDecision {
    pub allowed: bool,
    pub limit: usize,
    pub remaining: usize,
    /// Until the oldest counted request leaves the window.
    pub reset_after: Duration,
}

/// Sliding-window request counter keyed by client address.
#[derive(Default)]
pub(crate) struct RateLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub(crate) async fn check(&self, key: &str, cfg: &RateLimitConfig) -> RateDecision {
        self.check_at(key, cfg, Instant::now()).await
    }

    pub(crate) async fn check_at(
        &self,
        key: &str,
        cfg: &RateLimitConfig,
        now: Instant,
    ) -> RateDecision {
        let mut lock = self.windows.lock().await;
        if lock.len() > MAX_TRACKED_CLIENTS {
            lock.retain(|_, hits| {
                hits.back()
                    .is_some_and(|last| now.duration_since(*last) < cfg.window)
            });
        }
        let hits = lock.entry(key.to_string()).or_default();
        while hits
            .front()
            .is_some_and(|first| now.duration_since(*first) >= cfg.window)
        {
            hits.pop_front();
        }

        let allowed = hits.len() < cfg.max_requests;
        if allowed {
            hits.push_back(now);
        }
        let reset_after = hits
            .front()
            .map(|first| cfg.window.saturating_sub(now.duration_since(*first)))
            .unwrap_or(cfg.window);
        RateDecision {
            allowed,
            limit: cfg.max_requests,
            remaining: cfg.max_requests.saturating_sub(hits.len()),
            reset_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(max_requests: usize, window_secs: u64) -> RateLimitConfig {
        RateLimitConfig {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    #[tokio::test]
    async fn window_admits_limit_then_blocks() {
        let limiter = RateLimiter::default();
        let cfg = cfg(2, 60);
        let t0 = Instant::now();
        let first = limiter.check_at("a", &cfg, t0).await;
        assert!(first.allowed);
        assert_eq!(first.remaining, 1);
        assert!(limiter.check_at("a", &cfg, t0).await.allowed);
        let third = limiter.check_at("a", &cfg, t0 + Duration::from_secs(10)).await;
        assert!(!third.allowed);
        assert_eq!(third.remaining, 0);
        assert_eq!(third.reset_after, Duration::from_secs(50));
    }

    #[tokio::test]
    async fn old_hits_slide_out() {
        let limiter = RateLimiter::default();
        let cfg = cfg(1, 60);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", &cfg, t0).await.allowed);
        assert!(!limiter.check_at("a", &cfg, t0 + Duration::from_secs(59)).await.allowed);
        assert!(limiter.check_at("a", &cfg, t0 + Duration::from_secs(60)).await.allowed);
    }

    #[tokio::test]
    async fn clients_are_counted_separately() {
        let limiter = RateLimiter::default();
        let cfg = cfg(1, 60);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", &cfg, t0).await.allowed);
        assert!(limiter.check_at("b", &cfg, t0).await.allowed);
        assert!(!limiter.check_at("a", &cfg, t0).await.allowed);
    }
}
