//! Time-bounded cache for a single climate indicator.
//!
//! Only successfully fetched values are stored. A fallback value is never
//! cached, so once the TTL lapses the next request goes back upstream and a
//! degraded source is visible again within one TTL. A zero TTL disables the
//! cache entirely and every request re-fetches.

use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// Last good value of one metric and when it was fetched.
#[derive(Debug)]
pub struct TtlCache {
    ttl: Duration,
    slot: RwLock<Option<(Instant, f64)>>,
}

impl TtlCache {
    /// Create a cache holding values for `ttl`. A zero TTL disables it.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Whether values are retained at all.
    pub const fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// The configured time-to-live.
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value if it is younger than the TTL.
    pub async fn get(&self) -> Option<f64> {
        if !self.is_enabled() {
            return None;
        }
        let cached = *self.slot.read().await;
        cached.and_then(|(fetched_at, value)| (fetched_at.elapsed() < self.ttl).then_some(value))
    }

    /// Remember a freshly fetched value.
    pub async fn store(&self, value: f64) {
        if self.is_enabled() {
            *self.slot.write().await = Some((Instant::now(), value));
        }
    }
}
