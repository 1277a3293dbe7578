//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and capturing intermediate
//! artifacts for debugging. Pass [`NoopObserver`] for zero-overhead runs.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::types::FrequencyEntry;

/// Stage name constants, in execution order.
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_COUNT: &str = "count";
pub const STAGE_RANK: &str = "rank";

/// Wall-clock timer for a single stage.
#[derive(Debug)]
pub struct StageClock(Instant);

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Elapsed time since `start`.
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Metrics reported when a stage completes.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    /// Create a report with only a duration.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach an item count (tokens produced, distinct words, entries).
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Stage duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Item count, if the stage reported one.
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Callbacks fired at stage boundaries.
///
/// All methods default to no-ops, so implementations override only what
/// they need.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished, with its report.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The token sequence, after tokenization.
    fn on_tokens(&mut self, _tokens: &[&str]) {}

    /// The global frequency map, after all workers have joined.
    fn on_frequencies(&mut self, _frequencies: &FxHashMap<String, u64>) {}

    /// The final ranked entries.
    fn on_ranked(&mut self, _ranked: &[FrequencyEntry]) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per stage, in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage, report)` pairs.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_report_builder() {
        let report = StageReport::new(Duration::from_millis(5)).with_items(42);
        assert_eq!(report.elapsed(), Duration::from_millis(5));
        assert_eq!(report.items(), Some(42));
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_COUNT, &StageReport::new(Duration::ZERO));

        let stages: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(stages, vec![STAGE_TOKENIZE, STAGE_COUNT]);
    }

    #[test]
    fn test_noop_observer_compiles_as_default() {
        let mut obs = NoopObserver;
        obs.on_stage_start(STAGE_RANK);
        obs.on_tokens(&["a"]);
    }
}
