//! Pipeline orchestration
//!
//! This module wires the stages together: the [`runner`] executes one
//! generation call end to end, and the [`observer`] protocol exposes stage
//! boundaries for timing and debugging.

pub mod observer;
pub mod runner;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::FlashcardPipeline;
