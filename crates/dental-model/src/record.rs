//! Sparse external records and the resolved status mapping.
//!
//! External callers describe chart data as an ordered sequence of
//! [`SparseRecord`]s, each covering any subset of the 52 positions. The
//! reconciler turns that sequence into a [`StatusMap`] that has an entry for
//! every position.

use std::collections::BTreeMap;

use crate::position::ToothPosition;

/// A partial mapping from tooth positions to a status.
///
/// One item of the external input sequence. Records earlier in the sequence
/// take precedence over later ones, per position.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SparseRecord<T> {
    statuses: BTreeMap<ToothPosition, T>,
}

impl<T> SparseRecord<T> {
    pub fn new() -> Self {
        Self {
            statuses: BTreeMap::new(),
        }
    }

    /// Record a status for a position, replacing any prior value.
    pub fn set(&mut self, position: ToothPosition, status: T) {
        self.statuses.insert(position, status);
    }

    pub fn get(&self, position: ToothPosition) -> Option<&T> {
        self.statuses.get(&position)
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToothPosition, &T)> {
        self.statuses.iter().map(|(position, status)| (*position, status))
    }
}

impl<T> FromIterator<(ToothPosition, T)> for SparseRecord<T> {
    fn from_iter<I: IntoIterator<Item = (ToothPosition, T)>>(iter: I) -> Self {
        Self {
            statuses: iter.into_iter().collect(),
        }
    }
}

/// The resolved status mapping.
///
/// Maps produced by [`resolve`](Self::resolve) and
/// [`reconcile`](Self::reconcile) are total: every one of the 52 positions
/// has exactly one entry. A default-constructed map is empty and only useful
/// as the "no previous state" input to `reconcile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StatusMap<T> {
    statuses: BTreeMap<ToothPosition, T>,
}

impl<T: Clone> StatusMap<T> {
    /// Build the full mapping from scratch.
    ///
    /// For each position, the status comes from the first record in sequence
    /// order that defines one; positions no record covers get
    /// `default_status`.
    pub fn resolve(records: &[SparseRecord<T>], default_status: &T) -> Self {
        let mut statuses = BTreeMap::new();
        for position in ToothPosition::ALL {
            let matched = records.iter().find_map(|record| record.get(position));
            statuses.insert(position, matched.unwrap_or(default_status).clone());
        }
        Self { statuses }
    }

    /// Rebuild the mapping after the external record sequence changed.
    ///
    /// Same first-match scan as [`resolve`](Self::resolve), but positions the
    /// new records leave unspecified keep their entry from `self`, so
    /// in-progress local edits survive a refresh. `default_status` is used
    /// only when `self` lacks the position as well.
    pub fn reconcile(&self, records: &[SparseRecord<T>], default_status: &T) -> Self {
        let mut statuses = BTreeMap::new();
        for position in ToothPosition::ALL {
            let matched = records
                .iter()
                .find_map(|record| record.get(position))
                .or_else(|| self.get(position));
            statuses.insert(position, matched.unwrap_or(default_status).clone());
        }
        Self { statuses }
    }
}

impl<T> StatusMap<T> {
    pub fn get(&self, position: ToothPosition) -> Option<&T> {
        self.statuses.get(&position)
    }

    /// Status for a position, falling back to `default_status` when absent.
    pub fn status_or<'a>(&'a self, position: ToothPosition, default_status: &'a T) -> &'a T {
        self.statuses.get(&position).unwrap_or(default_status)
    }

    /// Replace the status of one position, returning the previous value.
    pub fn set(&mut self, position: ToothPosition, status: T) -> Option<T> {
        self.statuses.insert(position, status)
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToothPosition, &T)> {
        self.statuses.iter().map(|(position, status)| (*position, status))
    }
}
