//! Per-status occurrence counts over the active dentition subset.

use std::collections::HashMap;
use std::hash::Hash;

use crate::position::ChartMode;
use crate::record::StatusMap;

/// Count how many active positions hold each status.
///
/// Positions excluded by `mode` contribute nothing. Statuses with zero
/// active occurrences are absent from the result, not present with value 0;
/// display code defaults missing keys to 0. The full scan is recomputed on
/// every change - 52 entries, no delta tracking.
pub fn aggregate_counts<T: Clone + Eq + Hash>(
    statuses: &StatusMap<T>,
    mode: ChartMode,
) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for (position, status) in statuses.iter() {
        if !mode.contains(position) {
            continue;
        }
        *counts.entry(status.clone()).or_insert(0) += 1;
    }
    counts
}
