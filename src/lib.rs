//! Parallel word-frequency ranking.
//!
//! Computes the top-N most frequent words in a text, case-insensitively,
//! skipping a configurable exclusion set. The core is a two-phase concurrent
//! counting pipeline: tokens are partitioned into chunks, each chunk is
//! counted locally on its own worker with no shared state, and the local
//! maps are folded into one global map under a mutex taken once per chunk.
//!
//! # Quick start
//!
//! ```
//! use rapid_wordfreq::{top_words, ExclusionSet};
//!
//! let exclusions = ExclusionSet::from_words(["the", "and"]);
//! let top = top_words("the cat and the hat", &exclusions, 2).unwrap();
//! assert_eq!(top[0].word, "cat");
//! assert_eq!(top[0].count, 1);
//! ```
//!
//! For custom stages, tuning, or stage timing, use
//! [`pipeline::PipelineBuilder`] and a [`pipeline::PipelineObserver`].

pub mod chunk;
pub mod error;
pub mod freq;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod types;

pub use error::WordFreqError;
pub use nlp::ExclusionSet;
pub use pipeline::{NoopObserver, Pipeline, PipelineBuilder};
pub use types::{FrequencyEntry, WordFreqConfig};

/// Compute the `n` most frequent words of `text` with the default pipeline.
///
/// Convenience wrapper over [`Pipeline::run`] with a no-op observer.
pub fn top_words(
    text: &str,
    exclusions: &ExclusionSet,
    n: usize,
) -> Result<Vec<FrequencyEntry>, WordFreqError> {
    Pipeline::new().run(text, exclusions, n, &mut NoopObserver)
}
