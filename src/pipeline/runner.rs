//! Pipeline runner — orchestrates stage execution.
//!
//! [`Pipeline`] holds a statically-composed set of stages. Calling
//! [`Pipeline::run`] validates the configuration up front, then executes
//! tokenize → count → rank, threading results between stages and notifying
//! a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler
//! monomorphizes each combination into a unique concrete type. The default
//! stages are zero-sized and add no runtime cost.

use crate::error::WordFreqError;
use crate::freq::FrequencyAggregator;
use crate::nlp::{ExclusionSet, UnicodeTokenizer};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_COUNT, STAGE_RANK, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{CountFrequencies, SelectTop, Tokenize};
use crate::rank::TopSelector;
use crate::types::{FrequencyEntry, WordFreqConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Tok` | [`Tokenize`] | [`UnicodeTokenizer`] |
/// | `Cnt` | [`CountFrequencies`] | [`FrequencyAggregator`] |
/// | `Sel` | [`SelectTop`] | [`TopSelector`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Tok = UnicodeTokenizer, Cnt = FrequencyAggregator, Sel = TopSelector> {
    pub tokenizer: Tok,
    pub counter: Cnt,
    pub selector: Sel,
    pub config: WordFreqConfig,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            tokenizer: UnicodeTokenizer,
            counter: FrequencyAggregator,
            selector: TopSelector,
            config: WordFreqConfig::default(),
        }
    }
}

impl Pipeline {
    /// Build the default pipeline: Unicode tokenization, chunked parallel
    /// counting, deterministic top-N selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the default pipeline with a custom config.
    pub fn with_config(config: WordFreqConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl<Tok, Cnt, Sel> Pipeline<Tok, Cnt, Sel>
where
    Tok: Tokenize,
    Cnt: CountFrequencies,
    Sel: SelectTop,
{
    /// Execute the pipeline, producing the `n` most frequent words.
    ///
    /// The configuration is validated before any stage runs, so a bad
    /// config aborts the whole run with no partial computation. Empty text
    /// completes normally with an empty result.
    ///
    /// The `observer` receives callbacks at each stage boundary; pass
    /// [`crate::pipeline::NoopObserver`] for zero-overhead execution.
    pub fn run(
        &self,
        text: &str,
        exclusions: &ExclusionSet,
        n: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<FrequencyEntry>, WordFreqError> {
        self.config.validate()?;

        // Stage 0: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = self.tokenizer.tokenize(text, &self.config)?;
        let report = StageReport::new(clock.elapsed()).with_items(tokens.len());
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_tokens(&tokens);

        // Stage 1: Count
        trace_stage!(STAGE_COUNT);
        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let frequencies = self.counter.count(&tokens, exclusions, &self.config)?;
        let report = StageReport::new(clock.elapsed()).with_items(frequencies.len());
        observer.on_stage_end(STAGE_COUNT, &report);
        observer.on_frequencies(&frequencies);

        // Stage 2: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let ranked = self.selector.select(frequencies, n);
        let report = StageReport::new(clock.elapsed()).with_items(ranked.len());
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_ranked(&ranked);

        Ok(ranked)
    }
}

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the defaults and allows overriding individual stages or the
/// configuration.
///
/// ```
/// # use rapid_wordfreq::pipeline::PipelineBuilder;
/// # use rapid_wordfreq::WordFreqConfig;
/// let pipeline = PipelineBuilder::new()
///     .config(WordFreqConfig::new().with_chunk_size(512))
///     .build();
/// ```
pub struct PipelineBuilder<Tok = UnicodeTokenizer, Cnt = FrequencyAggregator, Sel = TopSelector> {
    tokenizer: Tok,
    counter: Cnt,
    selector: Sel,
    config: WordFreqConfig,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            tokenizer: UnicodeTokenizer,
            counter: FrequencyAggregator,
            selector: TopSelector,
            config: WordFreqConfig::default(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tok, Cnt, Sel> PipelineBuilder<Tok, Cnt, Sel> {
    /// Override the tokenization stage.
    pub fn tokenizer<T: Tokenize>(self, t: T) -> PipelineBuilder<T, Cnt, Sel> {
        PipelineBuilder {
            tokenizer: t,
            counter: self.counter,
            selector: self.selector,
            config: self.config,
        }
    }

    /// Override the counting stage.
    pub fn counter<C: CountFrequencies>(self, c: C) -> PipelineBuilder<Tok, C, Sel> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            counter: c,
            selector: self.selector,
            config: self.config,
        }
    }

    /// Override the ranking stage.
    pub fn selector<S: SelectTop>(self, s: S) -> PipelineBuilder<Tok, Cnt, S> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            counter: self.counter,
            selector: s,
            config: self.config,
        }
    }

    /// Override the configuration.
    pub fn config(mut self, config: WordFreqConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Tok, Cnt, Sel> {
        Pipeline {
            tokenizer: self.tokenizer,
            counter: self.counter,
            selector: self.selector,
            config: self.config,
        }
    }
}
