//! Occurrence counting and ranking
//!
//! Counts keep first-occurrence order so that the stable sort in
//! [`rank_counts`] breaks weight ties deterministically.

use crate::types::{WordCloudConfig, WordEntry};
use rustc_hash::FxHashMap;

/// Count occurrences of each distinct token, in first-seen order.
pub fn count_tokens<'a, I>(tokens: I) -> Vec<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    // token -> index into `counts`
    let mut seen: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut counts: Vec<(&'a str, u32)> = Vec::new();

    for token in tokens {
        if let Some(&idx) = seen.get(token) {
            counts[idx].1 += 1;
        } else {
            seen.insert(token, counts.len());
            counts.push((token, 1));
        }
    }

    counts
}

/// Display size for an occurrence count: `weight * size_per_occurrence`,
/// clamped to the configured font-size range.
///
/// An inverted range is treated as if its bounds were swapped.
pub fn size_for_weight(weight: u32, config: &WordCloudConfig) -> u32 {
    let low = config.min_font_size.min(config.max_font_size);
    let high = config.min_font_size.max(config.max_font_size);
    weight.saturating_mul(config.size_per_occurrence).clamp(low, high)
}

/// Turn first-seen counts into entries sorted by descending weight.
///
/// The sort is stable, so equal weights stay in first-seen order.
pub fn rank_counts(counts: &[(&str, u32)], config: &WordCloudConfig) -> Vec<WordEntry> {
    let mut entries: Vec<WordEntry> = counts
        .iter()
        .map(|&(text, weight)| WordEntry::new(text, weight, size_for_weight(weight, config)))
        .collect();

    entries.sort_by(|a, b| b.weight.cmp(&a.weight));
    entries
}
