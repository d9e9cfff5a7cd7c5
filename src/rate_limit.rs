//! Rate limiting for the bankcode-jp.com API.
//!
//! The API allows one request per fixed interval, so the limiter is a plain
//! fixed-interval gate with a burst capacity of 1: the first permit is
//! granted immediately, every later permit only once the interval has
//! elapsed since the previous grant.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use bankcode_api_client::rate_limit::FixedIntervalLimiter;
//!
//! let mut limiter = FixedIntervalLimiter::new(Duration::from_secs(3));
//! assert!(limiter.try_acquire().is_ok());
//! // The second permit is denied with the remaining wait time.
//! assert!(limiter.try_acquire().is_err());
//! ```

use std::time::{Duration, Instant};

/// Default minimum spacing between outbound requests.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(3);

/// A fixed-interval rate limiter with a burst capacity of 1.
///
/// Tracks the instant of the last granted permit and denies any request
/// arriving before one full interval has elapsed. The client holds one of
/// these behind an `Arc<tokio::sync::Mutex<_>>`, so concurrent callers of a
/// shared client queue up rather than reject.
#[derive(Debug)]
pub struct FixedIntervalLimiter {
    /// Minimum spacing between permits
    interval: Duration,
    /// When the last permit was granted
    last_permit: Option<Instant>,
}

impl FixedIntervalLimiter {
    /// Create a new limiter with the given interval between permits.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_permit: None,
        }
    }

    /// Try to acquire a permit.
    ///
    /// Returns `Ok(())` if the request is allowed, or `Err(wait_time)` with
    /// the remaining time until the next permit becomes available.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        let now = Instant::now();
        if let Some(last) = self.last_permit {
            let elapsed = now.duration_since(last);
            if elapsed < self.interval {
                return Err(self.interval - elapsed);
            }
        }
        self.last_permit = Some(now);
        Ok(())
    }

    /// Check whether a permit would be granted without consuming it.
    pub fn would_allow(&self) -> bool {
        self.last_permit
            .is_none_or(|last| last.elapsed() >= self.interval)
    }

    /// Get the time until the next permit is available.
    ///
    /// Returns `None` when a permit is available right now.
    pub fn time_until_available(&self) -> Option<Duration> {
        let last = self.last_permit?;
        self.interval.checked_sub(last.elapsed())
    }

    /// The configured interval between permits.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedIntervalLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_INTERVAL)
    }
}
