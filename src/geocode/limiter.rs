//! Rate Limiter
//!
//! Minimum-spacing guard for outbound geocoding calls. Not a token bucket:
//! it only guarantees a gap between consecutive calls.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Default spacing between two upstream calls of one direction.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1000);

/// Keeps at least `min_interval` between consecutive `wait` returns.
///
/// The lock is held across the sleep, so concurrent callers queue up and
/// each one is spaced from the previous stamp.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    // == Wait ==
    /// Suspends until the spacing since the previous call has elapsed.
    ///
    /// The stamp is taken after the wait, right before the caller issues
    /// its upstream request. Returns `true` if a delay was applied.
    pub async fn wait(&self) -> bool {
        let mut last = self.last_request.lock().await;

        let delayed = match *last {
            Some(previous) => {
                let elapsed = previous.elapsed();
                if elapsed < self.min_interval {
                    let remaining = self.min_interval - elapsed;
                    debug!("Rate limiter: delaying upstream call by {:?}", remaining);
                    sleep(remaining).await;
                    true
                } else {
                    false
                }
            }
            None => false,
        };

        *last = Some(Instant::now());
        delayed
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
