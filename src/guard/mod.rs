//! Input guard: pacing, validation and sanitization in front of the pipeline.

pub mod rate_limiter;
pub mod validation;

pub use rate_limiter::RateLimiter;
pub use validation::{find_denied_pattern, sanitize_text, validate_input, DENYLIST};

use crate::errors::{Result, WordCloudError};
use crate::types::WordCloudConfig;

/// Bundles a [`RateLimiter`] with the length limit used by [`validate_input`].
#[derive(Debug)]
pub struct InputGuard {
    limiter: RateLimiter,
    max_input_length: usize,
}

impl Default for InputGuard {
    fn default() -> Self {
        Self::new(&WordCloudConfig::default())
    }
}

impl InputGuard {
    /// Create a guard from the config's pacing interval and length limit
    pub fn new(config: &WordCloudConfig) -> Self {
        Self {
            limiter: RateLimiter::from_config(config),
            max_input_length: config.max_input_length,
        }
    }

    /// Use an existing limiter, e.g. one shared with another guard
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Pacing check; see [`RateLimiter::check_pacing`].
    pub fn check_pacing(&self) -> bool {
        self.limiter.check_pacing()
    }

    /// Pacing check that fails with [`WordCloudError::RateLimited`].
    pub fn admit(&self) -> Result<()> {
        if self.limiter.check_pacing() {
            Ok(())
        } else {
            let min_interval_ms =
                u64::try_from(self.limiter.min_interval().as_millis()).unwrap_or(u64::MAX);
            trace_event!(warn, min_interval_ms, "request rejected by pacing check");
            Err(WordCloudError::rate_limited(min_interval_ms))
        }
    }

    /// Validate against this guard's length limit and the denylist.
    pub fn validate<'a>(&self, text: &'a str) -> Result<&'a str> {
        validate_input(text, self.max_input_length).map_err(|err| {
            trace_event!(warn, code = %err.code(), "input rejected by validation");
            err
        })
    }

    /// See [`sanitize_text`].
    pub fn sanitize(&self, text: &str) -> String {
        sanitize_text(text)
    }
}
