//! Pipeline runner: runs the frequency stages, then the layout stage.
//!
//! [`WordCloudPipeline::run`] notifies an optional [`PipelineObserver`] at
//! each stage boundary. Frequency failures abort before the surface is
//! touched; layout failures are reported after the entries were computed.

use crate::errors::Result;
use crate::frequency::{FrequencyEngine, FrequencyStats};
use crate::layout::{DrawCommand, LayoutEngine, Surface};
use crate::pipeline::observer::{PipelineObserver, StageClock, StageReport, STAGE_LAYOUT};
use crate::types::{LayoutConfig, WordCloudConfig, WordEntry};
use serde::{Deserialize, Serialize};

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    pub entries: Vec<WordEntry>,
    pub stats: FrequencyStats,
    pub commands: Vec<DrawCommand>,
}

impl WordCloud {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A frequency engine and a layout engine run back to back.
#[derive(Debug, Default)]
pub struct WordCloudPipeline {
    frequency: FrequencyEngine,
    layout: LayoutEngine,
}

impl WordCloudPipeline {
    /// Build a pipeline from both configs, validating each.
    pub fn new(config: WordCloudConfig, layout: LayoutConfig) -> Result<Self> {
        Ok(Self {
            frequency: FrequencyEngine::new(config)?,
            layout: LayoutEngine::new(layout)?,
        })
    }

    /// Build a pipeline from already constructed engines.
    pub fn from_engines(frequency: FrequencyEngine, layout: LayoutEngine) -> Self {
        Self { frequency, layout }
    }

    pub fn frequency(&self) -> &FrequencyEngine {
        &self.frequency
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Guarded frequency stages only.
    pub fn process_text(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<WordEntry>> {
        self.frequency.process_text_observed(text, observer)
    }

    /// Layout stage only: reset, lay out and paint `entries` on `surface`.
    pub fn render<S>(
        &self,
        surface: Option<&mut S>,
        entries: &[WordEntry],
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<DrawCommand>>
    where
        S: Surface + ?Sized,
    {
        trace_stage!(STAGE_LAYOUT);
        observer.on_stage_start(STAGE_LAYOUT);
        let clock = StageClock::start();
        let commands = self.layout.draw_word_cloud(surface, entries)?;
        observer.on_stage_end(
            STAGE_LAYOUT,
            &StageReport::new(clock.elapsed()).with_items(commands.len()),
        );
        observer.on_commands(&commands);
        Ok(commands)
    }

    /// Execute every stage on `text`.
    ///
    /// Stages run in order:
    /// 1. Guard
    /// 2. Sanitize
    /// 3. Tokenize
    /// 4. Count
    /// 5. Rank
    /// 6. Layout (skipped silently when `surface` is `None`)
    pub fn run<S>(
        &self,
        text: &str,
        surface: Option<&mut S>,
        observer: &mut impl PipelineObserver,
    ) -> Result<WordCloud>
    where
        S: Surface + ?Sized,
    {
        let entries = self.process_text(text, observer)?;
        let commands = self.render(surface, &entries, observer)?;
        Ok(WordCloud {
            stats: FrequencyStats::from_entries(&entries),
            entries,
            commands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::guard::RateLimiter;
    use crate::layout::RecordingSurface;
    use crate::pipeline::observer::{
        NoopObserver, StageTimingObserver, ALL_STAGES, STAGE_GUARD,
    };
    use std::time::Duration;

    fn unpaced() -> WordCloudPipeline {
        WordCloudPipeline::from_engines(
            FrequencyEngine::default().with_rate_limiter(RateLimiter::new(Duration::ZERO)),
            LayoutEngine::default(),
        )
    }

    #[test]
    fn test_run_produces_entries_stats_and_commands() {
        let pipeline = unpaced();
        let mut surface = RecordingSurface::new();
        let cloud = pipeline
            .run("rust rust rust crab crab ferris", Some(&mut surface), &mut NoopObserver)
            .unwrap();

        let texts: Vec<&str> = cloud.entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["rust", "crab", "ferris"]);
        assert_eq!(cloud.stats.total_words, 6);
        assert_eq!(cloud.stats.most_frequent.as_deref(), Some("rust"));
        assert_eq!(cloud.commands.len(), 3);
        assert_eq!(surface.drawn_words(), texts);
    }

    #[test]
    fn test_run_without_surface_still_ranks() {
        let cloud = unpaced()
            .run("alpha beta alpha", None::<&mut RecordingSurface>, &mut NoopObserver)
            .unwrap();
        assert_eq!(cloud.entries.len(), 2);
        assert!(cloud.commands.is_empty());
    }

    #[test]
    fn test_observer_sees_every_stage() {
        let pipeline = unpaced();
        let mut surface = RecordingSurface::new();
        let mut observer = StageTimingObserver::new();
        pipeline
            .run("alpha beta gamma", Some(&mut surface), &mut observer)
            .unwrap();

        assert_eq!(observer.stages(), ALL_STAGES.to_vec());
        assert_eq!(observer.report(STAGE_LAYOUT).unwrap().items, Some(3));
    }

    #[test]
    fn test_failure_leaves_surface_untouched() {
        let pipeline = unpaced();
        let mut surface = RecordingSurface::new();
        let mut observer = StageTimingObserver::new();
        let err = pipeline
            .run("javascript:alert(1)", Some(&mut surface), &mut observer)
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::MaliciousContent);
        assert!(surface.ops().is_empty());
        // The guard stage never completed
        assert!(observer.report(STAGE_GUARD).is_none());
    }

    #[test]
    fn test_word_cloud_json() {
        let cloud = unpaced()
            .run("hello world hello", None::<&mut RecordingSurface>, &mut NoopObserver)
            .unwrap();
        let json = cloud.to_json().unwrap();
        assert!(json.contains(r#"{"text":"hello","weight":2,"size":40}"#));
        let parsed: WordCloud = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cloud);
    }
}
