//! Request pacing
//!
//! A token bucket of one: a call is accepted only if at least the minimum
//! interval has passed since the previously *accepted* call. Rejected calls
//! do not move the baseline, and nothing is queued.

use crate::types::{WordCloudConfig, MIN_INTERVAL_MS};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Pacing state for one caller.
///
/// Owned by whoever drives the pipeline rather than living in a global, so
/// independent engines (and tests) never see each other's timestamps. The
/// timestamp sits behind a mutex, so a limiter can be shared through an `Arc`.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    /// `None` until the first accepted call
    last_accepted: Mutex<Option<Instant>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_millis(MIN_INTERVAL_MS))
    }
}

impl RateLimiter {
    /// Create a limiter with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: Mutex::new(None),
        }
    }

    /// Create a limiter using `config.min_interval_ms`
    pub fn from_config(config: &WordCloudConfig) -> Self {
        Self::new(Duration::from_millis(config.min_interval_ms))
    }

    /// Minimum pause between accepted calls
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Check pacing against the current time.
    ///
    /// Returns `false` when the previous accepted call was less than
    /// [`min_interval`](Self::min_interval) ago; otherwise records now as the
    /// new baseline and returns `true`.
    pub fn check_pacing(&self) -> bool {
        self.check_pacing_at(Instant::now())
    }

    /// Check pacing against an explicit instant.
    pub fn check_pacing_at(&self, now: Instant) -> bool {
        let mut last = self
            .last_accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = *last {
            if now.saturating_duration_since(previous) < self.min_interval {
                return false;
            }
        }

        *last = Some(now);
        true
    }

    /// When the last call was accepted, if ever
    pub fn last_accepted(&self) -> Option<Instant> {
        *self
            .last_accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget the baseline; the next call is always accepted.
    pub fn reset(&self) {
        *self
            .last_accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
