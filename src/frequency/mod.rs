//! Frequency engine: raw text in, ranked [`WordEntry`] list out.
//!
//! Stages run in order:
//! 1. Guard (pacing, then validation)
//! 2. Sanitize
//! 3. Tokenize (normalize, split, drop short tokens, enforce the word cap)
//! 4. Count
//! 5. Rank (size scaling, stable sort by descending weight)
//!
//! Any failure aborts the call; no partial list is returned.

pub mod counter;
pub mod stats;

pub use counter::{count_tokens, rank_counts, size_for_weight};
pub use stats::FrequencyStats;

use crate::errors::{Result, WordCloudError};
use crate::guard::{InputGuard, RateLimiter};
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_COUNT, STAGE_GUARD,
    STAGE_RANK, STAGE_SANITIZE, STAGE_TOKENIZE,
};
use crate::types::{WordCloudConfig, WordEntry};

/// Turns text into a ranked word list, guarded by pacing and validation.
#[derive(Debug, Default)]
pub struct FrequencyEngine {
    config: WordCloudConfig,
    guard: InputGuard,
    tokenizer: Tokenizer,
}

impl FrequencyEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: WordCloudConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            guard: InputGuard::new(&config),
            tokenizer: Tokenizer::new().with_min_length(config.min_token_length),
            config,
        })
    }

    /// Replace the pacing state, e.g. with a limiter the caller also inspects.
    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.guard = self.guard.with_limiter(limiter);
        self
    }

    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    pub fn guard(&self) -> &InputGuard {
        &self.guard
    }

    /// Run the full guarded pipeline on `text`.
    ///
    /// Fails with `RateLimited`, `InvalidInput`, `InputTooLarge`,
    /// `MaliciousContent` or `TooManyWords`. Whitespace-only input returns an
    /// empty list.
    pub fn process_text(&self, text: &str) -> Result<Vec<WordEntry>> {
        self.process_text_observed(text, &mut NoopObserver)
    }

    /// [`process_text`](Self::process_text) with stage callbacks.
    pub fn process_text_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<WordEntry>> {
        // Stage 1: Guard. Pacing is stamped before validation runs.
        trace_stage!(STAGE_GUARD);
        observer.on_stage_start(STAGE_GUARD);
        let clock = StageClock::start();
        self.guard.admit()?;
        let validated = self.guard.validate(text)?;
        observer.on_stage_end(STAGE_GUARD, &StageReport::new(clock.elapsed()));

        if validated.trim().is_empty() {
            observer.on_entries(&[]);
            return Ok(Vec::new());
        }

        // Stage 2: Sanitize
        trace_stage!(STAGE_SANITIZE);
        observer.on_stage_start(STAGE_SANITIZE);
        let clock = StageClock::start();
        let sanitized = self.guard.sanitize(validated);
        observer.on_stage_end(STAGE_SANITIZE, &StageReport::new(clock.elapsed()));

        self.rank_words_observed(&sanitized, observer)
    }

    /// Tokenize, count and rank text that has already passed the guard.
    ///
    /// The word cap still applies.
    pub fn rank_words(&self, text: &str) -> Result<Vec<WordEntry>> {
        self.rank_words_observed(text, &mut NoopObserver)
    }

    fn rank_words_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<WordEntry>> {
        // Stage 3: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let normalized = self.tokenizer.normalize(text);
        let tokens = self.tokenizer.split(&normalized);
        if tokens.len() > self.config.max_words {
            trace_event!(
                warn,
                count = tokens.len(),
                max = self.config.max_words,
                "input rejected by word cap"
            );
            return Err(WordCloudError::too_many_words(
                tokens.len(),
                self.config.max_words,
            ));
        }
        observer.on_stage_end(
            STAGE_TOKENIZE,
            &StageReport::new(clock.elapsed()).with_items(tokens.len()),
        );
        observer.on_tokens(tokens.len());

        // Stage 4: Count
        trace_stage!(STAGE_COUNT);
        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let counts = count_tokens(tokens.iter().copied());
        observer.on_stage_end(
            STAGE_COUNT,
            &StageReport::new(clock.elapsed()).with_items(counts.len()),
        );

        // Stage 5: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let entries = rank_counts(&counts, &self.config);
        observer.on_stage_end(
            STAGE_RANK,
            &StageReport::new(clock.elapsed()).with_items(entries.len()),
        );
        observer.on_entries(&entries);

        trace_event!(
            debug,
            tokens = tokens.len(),
            unique = entries.len(),
            "ranked word frequencies"
        );
        Ok(entries)
    }
}
