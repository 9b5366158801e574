//! Summary statistics over a ranked entry list

use crate::types::WordEntry;
use serde::{Deserialize, Serialize};

/// Totals shown alongside a word cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyStats {
    /// Number of distinct words
    pub unique_words: usize,
    /// Sum of all weights
    pub total_words: u64,
    /// Text of the top-ranked entry
    pub most_frequent: Option<String>,
    /// Weight of the top-ranked entry, 0 when empty
    pub max_frequency: u32,
}

impl FrequencyStats {
    /// Compute statistics from entries sorted by descending weight.
    pub fn from_entries(entries: &[WordEntry]) -> Self {
        let top = entries.first();
        Self {
            unique_words: entries.len(),
            total_words: entries.iter().map(|e| u64::from(e.weight)).sum(),
            most_frequent: top.map(|e| e.text.clone()),
            max_frequency: top.map_or(0, |e| e.weight),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unique_words == 0
    }
}
