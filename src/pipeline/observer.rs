//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Pass [`NoopObserver`] when nothing needs to watch.

use crate::layout::DrawCommand;
use crate::types::WordEntry;
use std::time::{Duration, Instant};

/// Pacing check and validation.
pub const STAGE_GUARD: &str = "guard";
/// Markup and control-character stripping.
pub const STAGE_SANITIZE: &str = "sanitize";
/// Normalization, splitting, length filter and word cap.
pub const STAGE_TOKENIZE: &str = "tokenize";
/// Occurrence counting.
pub const STAGE_COUNT: &str = "count";
/// Size scaling and sorting.
pub const STAGE_RANK: &str = "rank";
/// Surface reset, placement and painting.
pub const STAGE_LAYOUT: &str = "layout";

/// Every stage, in execution order.
pub const ALL_STAGES: [&str; 6] = [
    STAGE_GUARD,
    STAGE_SANITIZE,
    STAGE_TOKENIZE,
    STAGE_COUNT,
    STAGE_RANK,
    STAGE_LAYOUT,
];

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a finished stage reports to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    /// Time spent in the stage
    pub duration: Duration,
    /// Number of items the stage produced (tokens, entries, commands), if any
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            items: None,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Receives callbacks at each stage boundary. All methods default to no-ops.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called with the filtered token count before counting.
    fn on_tokens(&mut self, _count: usize) {}

    /// Called with the ranked entries once frequency stages finish.
    fn on_entries(&mut self, _entries: &[WordEntry]) {}

    /// Called with the draw commands once layout finishes.
    fn on_commands(&mut self, _commands: &[DrawCommand]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every completed stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed stages in order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report of the most recent run of `stage`.
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .rev()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Names of completed stages in order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }

    /// Sum of all recorded durations.
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration).sum()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
