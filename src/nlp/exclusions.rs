//! Exclusion sets
//!
//! Words that must never be counted, supplied either as a custom list or as
//! a built-in language stopword list from the `stop-words` crate. The set is
//! an explicit parameter of the counting phase, not process-wide state, so
//! every run can use a different one.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of case-folded words excluded from counting.
///
/// Membership lookups expect an already case-folded word; the counting phase
/// folds each token before checking, so the fold happens exactly once per
/// occurrence. Immutable for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    words: FxHashSet<String>,
}

impl ExclusionSet {
    /// Create an empty set (nothing excluded).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a list of words, folding each to lowercase.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Build a set from a built-in language stopword list.
    ///
    /// Supported codes: en, de, fr, es, it, pt. Unknown codes fall back to
    /// English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            _ => LANGUAGE::English,
        };

        Self {
            words: get(lang).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add more words to the set, folding each to lowercase.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check whether a case-folded word is excluded. O(1) amortized.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of excluded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_words() {
        let set = ExclusionSet::from_words(["the", "and"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("hello"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_construction_folds_case() {
        let set = ExclusionSet::from_words(["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::empty();
        assert!(!set.contains("the"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_words() {
        let mut set = ExclusionSet::from_words(["the"]);
        set.add_words(["Extra"]);
        assert!(set.contains("extra"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_english_language_list() {
        let set = ExclusionSet::for_language("en");
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("frequency"));
    }

    #[test]
    fn test_german_language_list() {
        let set = ExclusionSet::for_language("de");
        assert!(set.contains("der"));
        assert!(set.contains("und"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let set = ExclusionSet::for_language("tlh");
        assert!(set.contains("the"));
    }

    #[test]
    fn test_from_iterator() {
        let set: ExclusionSet = ["the", "and"].into_iter().collect();
        assert!(set.contains("and"));
    }
}
