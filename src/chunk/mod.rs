//! Chunk partitioning
//!
//! Divides an ordered input into contiguous, non-overlapping chunks that are
//! each handed to one parallel worker. Two partitioners are provided: one
//! over slices (used for the token sequence in the counting phase) and one
//! over raw text (used for pre-tokenization fan-out), which keeps chunk ends
//! on char boundaries and extends them to the next delimiter rune so no word
//! is split across chunks.

use crate::error::WordFreqError;

/// Partition `items` into `ceil(len / size)` contiguous chunks.
///
/// The concatenation of all chunks reconstructs `items` exactly; the final
/// chunk may be shorter than `size`. An empty slice yields no chunks.
///
/// Fails with [`WordFreqError::InvalidChunkSize`] if `size` is zero.
pub fn chunk_slice<T>(
    items: &[T],
    size: usize,
) -> Result<impl Iterator<Item = &[T]>, WordFreqError> {
    if size == 0 {
        return Err(WordFreqError::InvalidChunkSize);
    }
    Ok(items.chunks(size))
}

/// Partition `text` into chunks of roughly `size` bytes.
///
/// Each chunk end is first snapped forward to a char boundary, then extended
/// to the next rune for which `is_delimiter` returns `true` (or to the end
/// of the text). Chunks are contiguous and non-overlapping, and their
/// concatenation reconstructs `text` exactly, so per-chunk tokenization sees
/// every word whole.
///
/// Fails with [`WordFreqError::InvalidChunkSize`] if `size` is zero.
pub fn chunk_text<F>(text: &str, size: usize, is_delimiter: F) -> Result<Vec<&str>, WordFreqError>
where
    F: Fn(char) -> bool,
{
    if size == 0 {
        return Err(WordFreqError::InvalidChunkSize);
    }

    let mut chunks = Vec::with_capacity(text.len() / size + 1);
    let mut start = 0;
    while start < text.len() {
        let mut end = (start + size).min(text.len());
        while end < text.len() && !text.is_char_boundary(end) {
            end += 1;
        }
        if end < text.len() {
            // Push the boundary to the next delimiter so the cut never lands
            // inside a word. The delimiter itself starts the next chunk.
            end = text[end..]
                .char_indices()
                .find(|&(_, c)| is_delimiter(c))
                .map(|(i, _)| end + i)
                .unwrap_or(text.len());
        }
        chunks.push(&text[start..end]);
        start = end;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::is_word_boundary;

    #[test]
    fn test_slice_chunk_count_and_sizes() {
        let items: Vec<u32> = (0..10).collect();
        let chunks: Vec<&[u32]> = chunk_slice(&items, 3).unwrap().collect();
        assert_eq!(chunks.len(), 4); // ceil(10 / 3)
        assert_eq!(chunks[0], &[0, 1, 2]);
        assert_eq!(chunks[3], &[9]); // final chunk may be short
    }

    #[test]
    fn test_slice_round_trip() {
        let items: Vec<u32> = (0..17).collect();
        for size in 1..=20 {
            let rebuilt: Vec<u32> = chunk_slice(&items, size)
                .unwrap()
                .flatten()
                .copied()
                .collect();
            assert_eq!(rebuilt, items, "size {size}");
        }
    }

    #[test]
    fn test_slice_empty_input() {
        let items: [u32; 0] = [];
        assert_eq!(chunk_slice(&items, 5).unwrap().count(), 0);
    }

    #[test]
    fn test_slice_zero_size_fails() {
        let items = [1, 2, 3];
        assert!(matches!(
            chunk_slice(&items, 0),
            Err(WordFreqError::InvalidChunkSize)
        ));
    }

    #[test]
    fn test_text_round_trip() {
        let text = "Hello, world! This is a test. Testing, 1, 2, 3...";
        for size in [1, 2, 3, 7, 16, 1000] {
            let rebuilt: String = chunk_text(text, size, is_word_boundary)
                .unwrap()
                .concat();
            assert_eq!(rebuilt, text, "size {size}");
        }
    }

    #[test]
    fn test_text_round_trip_multibyte() {
        let text = "日本語のテスト — überprüfung";
        for size in [1, 2, 3, 5, 100] {
            let rebuilt: String = chunk_text(text, size, is_word_boundary)
                .unwrap()
                .concat();
            assert_eq!(rebuilt, text, "size {size}");
        }
    }

    #[test]
    fn test_text_chunks_end_at_delimiters() {
        let text = "alpha beta gamma";
        let chunks = chunk_text(text, 3, is_word_boundary).unwrap();
        // Every chunk but the last must end just before a delimiter, so the
        // following chunk never begins mid-word.
        for chunk in &chunks[..chunks.len() - 1] {
            let next_char = text[text.find(chunk).unwrap() + chunk.len()..]
                .chars()
                .next()
                .unwrap();
            assert!(is_word_boundary(next_char), "chunk {chunk:?}");
        }
    }

    #[test]
    fn test_text_empty_input() {
        assert!(chunk_text("", 10, is_word_boundary).unwrap().is_empty());
    }

    #[test]
    fn test_text_zero_size_fails() {
        assert!(matches!(
            chunk_text("abc", 0, is_word_boundary),
            Err(WordFreqError::InvalidChunkSize)
        ));
    }

    #[test]
    fn test_text_without_delimiters_is_single_chunk() {
        let chunks = chunk_text("unbrokenword", 3, is_word_boundary).unwrap();
        assert_eq!(chunks, vec!["unbrokenword"]);
    }
}
