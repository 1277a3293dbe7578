//! Parallel frequency aggregation
//!
//! Fan-out/fan-in over token chunks: one rayon task per chunk computes a
//! local map ([`super::local::count_chunk`]), then folds it into the single
//! global map under a mutex. The mutex is the only shared mutable state, it
//! is taken once per chunk, and the critical-section cost is proportional to
//! the number of distinct words in that chunk rather than its raw length.
//!
//! Counting is commutative and associative, so the result is identical for
//! any chunk size and any degree of parallelism.

use std::sync::Mutex;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::chunk::chunk_slice;
use crate::error::WordFreqError;
use crate::nlp::ExclusionSet;
use crate::pipeline::traits::CountFrequencies;
use crate::types::WordFreqConfig;

use super::local::count_chunk;

/// Count token frequencies across the whole input.
///
/// Validates `cfg` before any parallel work starts (fail-fast). Small inputs
/// (below `cfg.sequential_threshold`) are counted in a single pass; larger
/// inputs fan out one task per chunk. When `cfg.max_workers` is set, workers
/// run on a dedicated pool of that size — a throughput knob only, the output
/// never changes.
pub fn count_frequencies(
    tokens: &[&str],
    exclusions: &ExclusionSet,
    cfg: &WordFreqConfig,
) -> Result<FxHashMap<String, u64>, WordFreqError> {
    cfg.validate()?;

    // Fan-out overhead dominates for small inputs; same result either way.
    if tokens.len() < cfg.sequential_threshold {
        return Ok(count_chunk(tokens, exclusions));
    }

    match cfg.max_workers {
        Some(workers) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()?;
            pool.install(|| count_parallel(tokens, exclusions, cfg.chunk_size))
        }
        None => count_parallel(tokens, exclusions, cfg.chunk_size),
    }
}

/// The two-phase parallel path: unsynchronized local counting, then a
/// mutex-guarded merge, one lock acquisition per chunk.
fn count_parallel(
    tokens: &[&str],
    exclusions: &ExclusionSet,
    chunk_size: usize,
) -> Result<FxHashMap<String, u64>, WordFreqError> {
    let chunks: Vec<&[&str]> = chunk_slice(tokens, chunk_size)?.collect();
    let global = Mutex::new(FxHashMap::default());

    chunks.par_iter().try_for_each(|chunk| -> Result<(), WordFreqError> {
        let local = count_chunk(chunk, exclusions);
        if local.is_empty() {
            return Ok(());
        }

        // A poisoned lock means another worker panicked mid-merge; the
        // global map would be incomplete, so the whole aggregation fails.
        let mut merged = global.lock().map_err(|_| WordFreqError::WorkerPanicked)?;
        for (word, count) in local {
            *merged.entry(word).or_insert(0) += count;
        }
        Ok(())
    })?;

    // All workers have joined; the map is read-only from here on.
    global
        .into_inner()
        .map_err(|_| WordFreqError::WorkerPanicked)
}

/// Counting stage wrapping [`count_frequencies`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyAggregator;

impl CountFrequencies for FrequencyAggregator {
    fn count(
        &self,
        tokens: &[&str],
        exclusions: &ExclusionSet,
        cfg: &WordFreqConfig,
    ) -> Result<FxHashMap<String, u64>, WordFreqError> {
        count_frequencies(tokens, exclusions, cfg)
    }
}
