//! Top-N selection
//!
//! Ranks a frequency map by count and returns the N most frequent entries.
//! Ties are broken alphabetically so the same input always produces the same
//! ranking regardless of map iteration order.

use rustc_hash::FxHashMap;

use crate::pipeline::traits::SelectTop;
use crate::types::FrequencyEntry;

/// Return the `n` highest-count entries, sorted descending by count with
/// alphabetical tie-break.
///
/// `n == 0` yields an empty vec; `n` larger than the number of distinct
/// words yields all entries sorted.
pub fn top_n(frequencies: FxHashMap<String, u64>, n: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = frequencies
        .into_iter()
        .map(|(word, count)| FrequencyEntry { word, count })
        .collect();

    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(n);
    entries
}

/// Ranking stage wrapping [`top_n`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TopSelector;

impl SelectTop for TopSelector {
    fn select(&self, frequencies: FxHashMap<String, u64>, n: usize) -> Vec<FrequencyEntry> {
        top_n(frequencies, n)
    }
}
