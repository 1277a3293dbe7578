//! Unicode word tokenization
//!
//! Splits text into word tokens on any rune that is neither a letter nor a
//! digit (full Unicode classification, not ASCII-only). For large inputs the
//! tokenizer can fan out over raw-text chunks, with chunk ends aligned to
//! delimiter runes so a word never straddles a chunk boundary.

use rayon::prelude::*;

use crate::chunk::chunk_text;
use crate::error::WordFreqError;
use crate::pipeline::traits::Tokenize;
use crate::types::WordFreqConfig;

/// Returns `true` if `c` separates words: anything that is not a letter
/// and not a digit.
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split `text` into word tokens, in source order.
///
/// Runs of delimiters produce no token; empty input yields an empty vec.
/// Tokens borrow from `text` — case-folding is deferred to the counting
/// phase, where the folded copy is made exactly once per occurrence.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_word_boundary)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokenize `text` in parallel over raw-text chunks of roughly `chunk_size`
/// bytes, preserving source order.
///
/// Chunk ends are extended to the next delimiter rune, so the token sequence
/// is identical to the sequential [`tokenize`] for any chunk size.
///
/// Fails with [`WordFreqError::InvalidChunkSize`] if `chunk_size` is zero.
pub fn tokenize_parallel(text: &str, chunk_size: usize) -> Result<Vec<&str>, WordFreqError> {
    let chunks = chunk_text(text, chunk_size, is_word_boundary)?;

    // Per-chunk token vectors come back in chunk order; flatten sequentially.
    let per_chunk: Vec<Vec<&str>> = chunks.par_iter().map(|chunk| tokenize(chunk)).collect();

    Ok(per_chunk.into_iter().flatten().collect())
}

/// Tokenizer stage splitting on non-letter/non-digit runes.
///
/// Chooses sequential or chunk-parallel tokenization from
/// `WordFreqConfig::text_chunk_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenize for UnicodeTokenizer {
    fn tokenize<'t>(
        &self,
        text: &'t str,
        cfg: &WordFreqConfig,
    ) -> Result<Vec<&'t str>, WordFreqError> {
        match cfg.text_chunk_size {
            Some(size) => tokenize_parallel(text, size),
            None => Ok(tokenize(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_punctuation() {
        let text = "Hello, world! This is a test.";
        assert_eq!(
            tokenize(text),
            vec!["Hello", "world", "This", "is", "a", "test"]
        );
    }

    #[test]
    fn test_full_sentence_with_digits_and_apostrophes() {
        let text = "Hello, world! This is a test. Testing, 1, 2, 3... Go is great; isn't it?";
        assert_eq!(
            tokenize(text),
            vec![
                "Hello", "world", "This", "is", "a", "test", "Testing", "1", "2", "3", "Go",
                "is", "great", "isn", "t", "it"
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,.!?;  ").is_empty());
    }

    #[test]
    fn test_unicode_letters_kept_together() {
        assert_eq!(tokenize("café, naïve!"), vec!["café", "naïve"]);
        assert_eq!(tokenize("日本語 テスト"), vec!["日本語", "テスト"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "The quick brown fox jumps over the lazy dog, again and again; 42 times!";
        let expected = tokenize(text);
        for chunk_size in [1, 2, 3, 5, 8, 64, 4096] {
            assert_eq!(
                tokenize_parallel(text, chunk_size).unwrap(),
                expected,
                "chunk_size {chunk_size}"
            );
        }
    }

    #[test]
    fn test_parallel_does_not_split_words_at_chunk_boundaries() {
        // A chunk size smaller than every word forces the boundary into the
        // middle of a word unless ends are delimiter-aligned.
        let text = "supercalifragilistic expialidocious";
        assert_eq!(
            tokenize_parallel(text, 3).unwrap(),
            vec!["supercalifragilistic", "expialidocious"]
        );
    }

    #[test]
    fn test_parallel_multibyte_safe() {
        let text = "Übung macht den Meister — тест проверка 日本語";
        let expected = tokenize(text);
        for chunk_size in [1, 2, 7, 100] {
            assert_eq!(tokenize_parallel(text, chunk_size).unwrap(), expected);
        }
    }

    #[test]
    fn test_parallel_rejects_zero_chunk_size() {
        assert!(matches!(
            tokenize_parallel("some text", 0),
            Err(WordFreqError::InvalidChunkSize)
        ));
    }

    #[test]
    fn test_tokenizer_stage_respects_config() {
        let cfg = WordFreqConfig::default();
        let tokens = UnicodeTokenizer.tokenize("one two three", &cfg).unwrap();
        assert_eq!(tokens, vec!["one", "two", "three"]);

        let cfg = WordFreqConfig::default().with_text_chunk_size(4);
        let tokens = UnicodeTokenizer.tokenize("one two three", &cfg).unwrap();
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }
}
