//! Chunk-local counting — the unsynchronized phase.

use rustc_hash::FxHashMap;

use crate::nlp::ExclusionSet;

/// Count the tokens of a single chunk into a fresh local map.
///
/// Each token is case-folded, then dropped if the folded form is in
/// `exclusions`, otherwise counted. Pure local computation: no shared state,
/// no synchronization, cannot fail. An empty chunk yields an empty map.
pub fn count_chunk(tokens: &[&str], exclusions: &ExclusionSet) -> FxHashMap<String, u64> {
    let mut counts = FxHashMap::default();
    for token in tokens {
        let word = token.to_lowercase();
        if exclusions.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_case_insensitively() {
        let counts = count_chunk(&["Hello", "hello", "HELLO"], &ExclusionSet::empty());
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["hello"], 3);
    }

    #[test]
    fn test_exclusion_applies_after_folding() {
        let exclusions = ExclusionSet::from_words(["the", "and"]);
        let counts = count_chunk(&["The", "THE", "and", "word"], &exclusions);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["word"], 1);
    }

    #[test]
    fn test_empty_chunk() {
        assert!(count_chunk(&[], &ExclusionSet::empty()).is_empty());
    }
}
