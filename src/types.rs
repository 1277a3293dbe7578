//! Shared configuration and result types.

use serde::{Deserialize, Serialize};

use crate::error::WordFreqError;

/// A word and its total occurrence count.
///
/// The `word` is already case-folded; equality is exact string match. This is
/// the unit the result consumer receives — presentation (printing, further
/// serialization) happens outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Case-folded word.
    pub word: String,
    /// Number of occurrences across the entire input.
    pub count: u64,
}

impl FrequencyEntry {
    /// Create a new entry.
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Configuration for the word-frequency pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFreqConfig {
    /// Number of tokens per counting chunk (one parallel task each).
    pub chunk_size: usize,
    /// Byte-size target for raw-text chunks during parallel tokenization.
    /// `None` tokenizes sequentially.
    pub text_chunk_size: Option<usize>,
    /// Cap on concurrently-running counting workers. `None` uses the global
    /// rayon pool. Purely a throughput knob; never changes the output.
    pub max_workers: Option<usize>,
    /// Inputs with fewer tokens than this are counted sequentially, since
    /// fan-out overhead dominates below this point.
    pub sequential_threshold: usize,
}

impl Default for WordFreqConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            text_chunk_size: None,
            max_workers: None,
            sequential_threshold: 1000,
        }
    }
}

impl WordFreqConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable parallel tokenization over raw-text chunks of roughly
    /// `size` bytes.
    pub fn with_text_chunk_size(mut self, size: usize) -> Self {
        self.text_chunk_size = Some(size);
        self
    }

    /// Cap the number of concurrent counting workers.
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = Some(workers);
        self
    }

    /// Set the sequential fast-path threshold.
    pub fn with_sequential_threshold(mut self, threshold: usize) -> Self {
        self.sequential_threshold = threshold;
        self
    }

    /// Check the configuration before any parallel work starts.
    ///
    /// Called by the pipeline and the aggregator so a bad config aborts the
    /// whole run up front, never mid-computation.
    pub fn validate(&self) -> Result<(), WordFreqError> {
        if self.chunk_size == 0 {
            return Err(WordFreqError::InvalidChunkSize);
        }
        if self.text_chunk_size == Some(0) {
            return Err(WordFreqError::InvalidChunkSize);
        }
        if self.max_workers == Some(0) {
            return Err(WordFreqError::InvalidWorkerCap);
        }
        Ok(())
    }
}
