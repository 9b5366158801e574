//! # rapid_wordcloud
//!
//! Turns free-form text into a ranked word-frequency list and lays that list
//! out as a word cloud on a fixed-size drawing surface.
//!
//! ## Features
//!
//! - **Guarded**: pacing, length limits and a script-injection denylist run
//!   before any text is processed
//! - **Deterministic**: ties rank by first occurrence; layout is a single
//!   greedy pass with no randomness
//! - **Backend-agnostic**: layout talks to a small [`Surface`] trait, with
//!   recording and SVG implementations included
//!
//! ## Quick start
//!
//! ```rust
//! use rapid_wordcloud::{FrequencyEngine, LayoutEngine, RecordingSurface};
//!
//! let engine = FrequencyEngine::default();
//! let entries = engine.process_text("hello world hello").unwrap();
//! assert_eq!(entries[0].text, "hello");
//! assert_eq!(entries[0].size, 40);
//!
//! let mut surface = RecordingSurface::new();
//! let commands = LayoutEngine::default()
//!     .draw_word_cloud(Some(&mut surface), &entries)
//!     .unwrap();
//! assert_eq!(commands.len(), 2);
//! ```

#[macro_use]
mod macros;

pub mod errors;
pub mod frequency;
pub mod guard;
pub mod json;
pub mod layout;
pub mod nlp;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use errors::{ErrorCode, Result, WordCloudError};
pub use types::{Color, LayoutConfig, WordCloudConfig, WordEntry, DEFAULT_PALETTE};

// Re-export main functionality
pub use frequency::{FrequencyEngine, FrequencyStats};
pub use guard::{sanitize_text, validate_input, InputGuard, RateLimiter, DENYLIST};
pub use layout::{
    DrawCommand, LayoutEngine, RecordingSurface, Surface, SurfaceOp, SvgSurface, TextStyle,
};
pub use nlp::tokenizer::Tokenizer;
pub use pipeline::{
    NoopObserver, PipelineObserver, StageReport, StageTimingObserver, WordCloud,
    WordCloudPipeline, WordCloudSession,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
