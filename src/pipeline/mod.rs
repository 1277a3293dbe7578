//! Pipeline orchestration
//!
//! Wires tokenization, frequency counting, and top-N selection into
//! `text → ranked entries`, with observer hooks at every stage boundary.

pub mod observer;
pub mod runner;
pub mod traits;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{Pipeline, PipelineBuilder};
pub use traits::{CountFrequencies, SelectTop, Tokenize};
