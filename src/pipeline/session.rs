//! Caller-facing word-cloud state
//!
//! A session holds the latest ranked entries and an optional surface, the
//! way an interactive front end would. Frequency failures wipe both so no
//! stale cloud is shown; a render failure keeps the entries because the
//! statistics are still valid.

use crate::errors::Result;
use crate::frequency::FrequencyStats;
use crate::layout::{DrawCommand, Surface};
use crate::pipeline::observer::NoopObserver;
use crate::pipeline::runner::WordCloudPipeline;
use crate::types::WordEntry;

#[derive(Debug)]
pub struct WordCloudSession<S: Surface> {
    pipeline: WordCloudPipeline,
    surface: Option<S>,
    entries: Vec<WordEntry>,
    commands: Vec<DrawCommand>,
}

impl<S: Surface> WordCloudSession<S> {
    /// Create a session without a surface; generated entries are kept but
    /// nothing is painted until one is attached.
    pub fn new(pipeline: WordCloudPipeline) -> Self {
        Self {
            pipeline,
            surface: None,
            entries: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn with_surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Attach a surface, returning the previous one.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn pipeline(&self) -> &WordCloudPipeline {
        &self.pipeline
    }

    /// Entries from the last successful generation.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Commands painted by the last successful render.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn stats(&self) -> FrequencyStats {
        FrequencyStats::from_entries(&self.entries)
    }

    /// Rank `text` and paint it.
    ///
    /// Blank input is ignored and leaves the current state alone. When
    /// ranking fails, entries and surface are cleared and the error returned.
    /// When painting fails, the new entries are kept and the error returned.
    pub fn generate(&mut self, text: &str) -> Result<&[WordEntry]> {
        if text.trim().is_empty() {
            return Ok(&self.entries);
        }

        let entries = match self.pipeline.process_text(text, &mut NoopObserver) {
            Ok(entries) => entries,
            Err(err) => {
                self.reset_after_failure();
                return Err(err);
            }
        };

        self.entries = entries;
        self.commands.clear();
        self.commands =
            self.pipeline
                .render(self.surface.as_mut(), &self.entries, &mut NoopObserver)?;
        Ok(&self.entries)
    }

    /// Drop all entries and blank the surface.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.commands.clear();
        self.pipeline.layout().clear_surface(self.surface.as_mut())
    }

    fn reset_after_failure(&mut self) {
        self.entries.clear();
        self.commands.clear();
        if let Err(_err) = self.pipeline.layout().clear_surface(self.surface.as_mut()) {
            trace_event!(warn, error = %_err, "failed to clear surface after rejected input");
        }
    }
}
