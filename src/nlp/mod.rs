//! Text-processing components
//!
//! This module provides Unicode tokenization and exclusion-set filtering.

pub mod exclusions;
pub mod tokenizer;

pub use exclusions::ExclusionSet;
pub use tokenizer::{is_word_boundary, tokenize, tokenize_parallel, UnicodeTokenizer};
