//! Frequency counting
//!
//! Two-phase counting: each chunk of tokens is counted locally with no
//! shared state, then the chunk-local maps are folded into one global map
//! under a mutex. The critical section is entered once per chunk, not once
//! per word, which bounds lock contention.

pub mod aggregator;
pub mod local;

pub use aggregator::{count_frequencies, FrequencyAggregator};
pub use local::count_chunk;
