//! Pipeline orchestration: guard and frequency stages followed by layout.
//!
//! ## Submodules
//!
//! - [`runner`]: [`WordCloudPipeline`], stage sequencing and observers
//! - [`observer`]: stage hooks for logging, profiling and debugging
//! - [`session`]: caller-facing state: current entries, statistics, surface

pub mod observer;
pub mod runner;
pub mod session;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{WordCloud, WordCloudPipeline};
pub use session::WordCloudSession;
