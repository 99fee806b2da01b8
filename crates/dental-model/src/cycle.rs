//! Deterministic status cycling for tooth clicks.

use std::collections::HashMap;
use std::hash::Hash;

/// Next status for a tooth, cycling among the currently visible statuses.
///
/// `order` is the palette's definition order; statuses flagged in `hidden`
/// are skipped while the remaining ones keep their relative order. Rules:
///
/// - nothing visible: `current` is returned unchanged (cycling is a no-op),
/// - `current` not visible (hidden, or not in `order` at all): the first
///   visible status,
/// - otherwise: the next visible status, wrapping at the end.
///
/// A cycled status is therefore always a currently visible one.
pub fn next_status<T: Clone + Eq + Hash>(
    current: &T,
    order: &[T],
    hidden: &HashMap<T, bool>,
) -> T {
    let visible: Vec<&T> = order
        .iter()
        .filter(|status| !hidden.get(*status).copied().unwrap_or(false))
        .collect();

    let Some(first) = visible.first() else {
        return current.clone();
    };

    match visible.iter().position(|status| *status == current) {
        Some(index) => visible[(index + 1) % visible.len()].clone(),
        None => (*first).clone(),
    }
}
