//! Categorical aggregation helpers: value counts and mode.
//!
//! Ties are always broken by first occurrence in iteration order, so the
//! results are deterministic for a given table order.

use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each distinct value.
///
/// Returns `(value, count)` pairs sorted by descending count; values with
/// equal counts keep the order in which they were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // `sort_by` is stable, which preserves first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, or `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Counts for a column that may contain missing cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    /// Distinct non-missing values with their counts, most frequent first.
    pub counts: Vec<(String, usize)>,
    /// Number of rows with no value.
    pub missing: usize,
}

impl CategoryCounts {
    /// Tally a column, treating `None` and blank strings as missing.
    pub fn from_column<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut missing = 0usize;
        let present: Vec<&str> = values
            .into_iter()
            .filter_map(|value| match value.map(str::trim) {
                Some(v) if !v.is_empty() => Some(v),
                _ => {
                    missing += 1;
                    None
                }
            })
            .collect();

        Self {
            counts: value_counts(present)
                .into_iter()
                .map(|(value, count)| (value.to_string(), count))
                .collect(),
            missing,
        }
    }

    /// Rows accounted for, including missing ones.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum::<usize>() + self.missing
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
