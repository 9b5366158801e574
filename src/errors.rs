//! Error types for rapid_wordcloud
//!
//! Every failure the library can report lives in [`WordCloudError`]. Guard and
//! limit failures are terminal for the call that produced them; only
//! [`WordCloudError::RateLimited`] is worth retrying.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordCloudError>;

/// Main error type for rapid_wordcloud
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordCloudError {
    /// Input is empty or otherwise not processable text
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Input exceeds the configured character limit
    #[error("Input too large: {length} UTF-16 units (maximum {max} allowed)")]
    InputTooLarge { length: usize, max: usize },

    /// Input matched an entry of the script-injection denylist
    #[error("Input contains potentially malicious content (matched {pattern:?})")]
    MaliciousContent { pattern: String },

    /// Called again before the pacing interval elapsed
    #[error("Rate limited: wait at least {min_interval_ms}ms between requests")]
    RateLimited { min_interval_ms: u64 },

    /// Token count after filtering exceeds the configured limit
    #[error("Too many words: {count} (maximum {max} processed)")]
    TooManyWords { count: usize, max: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A drawing surface failed to measure or paint
    #[error("Surface error: {message}")]
    Surface { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordCloudError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an input too large error
    pub fn input_too_large(length: usize, max: usize) -> Self {
        Self::InputTooLarge { length, max }
    }

    /// Create a malicious content error naming the matched pattern
    pub fn malicious_content(pattern: impl Into<String>) -> Self {
        Self::MaliciousContent {
            pattern: pattern.into(),
        }
    }

    /// Create a rate limited error
    pub fn rate_limited(min_interval_ms: u64) -> Self {
        Self::RateLimited { min_interval_ms }
    }

    /// Create a too many words error
    pub fn too_many_words(count: usize, max: usize) -> Self {
        Self::TooManyWords { count, max }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a surface error
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Stable code for programmatic matching
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::InputTooLarge { .. } => ErrorCode::InputTooLarge,
            Self::MaliciousContent { .. } => ErrorCode::MaliciousContent,
            Self::RateLimited { .. } => ErrorCode::RateLimited,
            Self::TooManyWords { .. } => ErrorCode::TooManyWords,
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            Self::Surface { .. } => ErrorCode::Surface,
            Self::Serialization { .. } => ErrorCode::Serialization,
        }
    }

    /// Check if the caller may retry the same input later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Check if this error comes from a resource-protection limit
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(
            self,
            Self::InputTooLarge { .. } | Self::TooManyWords { .. }
        )
    }
}

impl From<serde_json::Error> for WordCloudError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Stable, serializable identifier for each [`WordCloudError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidInput,
    InputTooLarge,
    MaliciousContent,
    RateLimited,
    TooManyWords,
    InvalidConfig,
    Surface,
    Serialization,
}

impl ErrorCode {
    /// The snake_case name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "invalid_input",
            ErrorCode::InputTooLarge => "input_too_large",
            ErrorCode::MaliciousContent => "malicious_content",
            ErrorCode::RateLimited => "rate_limited",
            ErrorCode::TooManyWords => "too_many_words",
            ErrorCode::InvalidConfig => "invalid_config",
            ErrorCode::Surface => "surface",
            ErrorCode::Serialization => "serialization",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
