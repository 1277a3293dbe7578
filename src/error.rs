//! Error types for the word-frequency pipeline.
//!
//! Configuration errors are detected before any parallel work starts, so a
//! failed run never leaves partial computation behind. Worker failures abort
//! the whole aggregation rather than dropping a chunk's contribution.

use thiserror::Error;

/// Errors surfaced by the word-frequency pipeline.
#[derive(Debug, Error)]
pub enum WordFreqError {
    /// A chunk size of zero was configured (slice or text partitioning).
    #[error("chunk size must be greater than 0")]
    InvalidChunkSize,

    /// `max_workers` was set to zero; use `None` for an unbounded pool.
    #[error("worker cap must be greater than 0 when set")]
    InvalidWorkerCap,

    /// The bounded worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// A counting worker panicked before merging its local map, so the
    /// global frequency map would be incomplete.
    #[error("a counting worker panicked; aggregation aborted")]
    WorkerPanicked,
}
