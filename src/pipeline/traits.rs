//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the defaults ([`UnicodeTokenizer`],
//! [`FrequencyAggregator`], [`TopSelector`]) are zero-sized and add no
//! runtime cost.
//!
//! [`UnicodeTokenizer`]: crate::nlp::UnicodeTokenizer
//! [`FrequencyAggregator`]: crate::freq::FrequencyAggregator
//! [`TopSelector`]: crate::rank::TopSelector

use rustc_hash::FxHashMap;

use crate::error::WordFreqError;
use crate::nlp::ExclusionSet;
use crate::types::{FrequencyEntry, WordFreqConfig};

/// Tokenization stage: raw text to an ordered sequence of word tokens.
///
/// # Contract
///
/// - Tokens borrow from `text` and appear in source order, unfolded.
/// - Empty input yields an empty vec, never an error.
/// - The only failure mode is invalid configuration (e.g., a zero text
///   chunk size), detected before any work is done.
pub trait Tokenize {
    /// Split `text` into word tokens.
    fn tokenize<'t>(
        &self,
        text: &'t str,
        cfg: &WordFreqConfig,
    ) -> Result<Vec<&'t str>, WordFreqError>;
}

/// Counting stage: tokens to a global frequency map.
///
/// # Contract
///
/// - For every case-folded word not in `exclusions`, the map holds its exact
///   occurrence count across all of `tokens`; excluded words never appear.
/// - The result is independent of chunking and parallelism.
/// - Configuration errors abort before any parallel work; a failed worker
///   fails the whole aggregation rather than dropping its chunk.
pub trait CountFrequencies {
    /// Count case-folded token frequencies, skipping excluded words.
    fn count(
        &self,
        tokens: &[&str],
        exclusions: &ExclusionSet,
        cfg: &WordFreqConfig,
    ) -> Result<FxHashMap<String, u64>, WordFreqError>;
}

/// Ranking stage: frequency map to the top-N entries.
pub trait SelectTop {
    /// Return at most `n` entries sorted descending by count.
    fn select(&self, frequencies: FxHashMap<String, u64>, n: usize) -> Vec<FrequencyEntry>;
}
