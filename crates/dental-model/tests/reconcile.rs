#![allow(missing_docs)]

use dental_model::{SparseRecord, StatusMap, ToothPosition};
use proptest::prelude::*;

fn record(entries: &[(ToothPosition, &str)]) -> SparseRecord<String> {
    entries
        .iter()
        .map(|(position, status)| (*position, (*status).to_string()))
        .collect()
}

#[test]
fn resolve_assigns_default_everywhere_without_records() {
    let map = StatusMap::resolve(&[], &"A".to_string());
    assert_eq!(map.len(), 52);
    for position in ToothPosition::ALL {
        assert_eq!(map.get(position).map(String::as_str), Some("A"));
    }
}

#[test]
fn resolve_first_match_wins() {
    let records = vec![
        record(&[(ToothPosition::T11, "A")]),
        record(&[(ToothPosition::T11, "B"), (ToothPosition::T12, "B")]),
    ];
    let map = StatusMap::resolve(&records, &"default".to_string());
    assert_eq!(map.get(ToothPosition::T11).map(String::as_str), Some("A"));
    assert_eq!(map.get(ToothPosition::T12).map(String::as_str), Some("B"));
}

#[test]
fn reconcile_preserves_unspecified_edits() {
    // A local edit set 11 to "B"; an external refresh that does not mention
    // 11 must not clobber it.
    let mut previous = StatusMap::default();
    previous.set(ToothPosition::T11, "B".to_string());

    let map = previous.reconcile(&[], &"A".to_string());
    assert_eq!(map.len(), 52);
    assert_eq!(map.get(ToothPosition::T11).map(String::as_str), Some("B"));
    assert_eq!(map.get(ToothPosition::T12).map(String::as_str), Some("A"));
}

#[test]
fn reconcile_falls_back_to_default_absent_both() {
    let map = StatusMap::default().reconcile(&[], &"A".to_string());
    assert_eq!(map.len(), 52);
    for position in ToothPosition::ALL {
        assert_eq!(map.get(position).map(String::as_str), Some("A"));
    }
}

#[test]
fn reconcile_lets_records_override_previous() {
    let previous = StatusMap::resolve(&[], &"A".to_string());
    let map = previous.reconcile(&[record(&[(ToothPosition::T31, "B")])], &"A".to_string());
    assert_eq!(map.get(ToothPosition::T31).map(String::as_str), Some("B"));
}

fn any_position() -> impl Strategy<Value = ToothPosition> {
    prop::sample::select(ToothPosition::ALL.to_vec())
}

fn any_record() -> impl Strategy<Value = SparseRecord<String>> {
    prop::collection::btree_map(any_position(), prop::sample::select(vec!["A", "B", "C"]), 0..16)
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(position, status)| (position, status.to_string()))
                .collect()
        })
}

proptest! {
    #[test]
    fn resolve_is_total(records in prop::collection::vec(any_record(), 0..6)) {
        let map = StatusMap::resolve(&records, &"default".to_string());
        prop_assert_eq!(map.len(), 52);
        for position in ToothPosition::ALL {
            prop_assert!(map.get(position).is_some());
        }
    }

    #[test]
    fn reconcile_is_total(
        previous_records in prop::collection::vec(any_record(), 0..6),
        records in prop::collection::vec(any_record(), 0..6),
    ) {
        let previous = StatusMap::resolve(&previous_records, &"default".to_string());
        let map = previous.reconcile(&records, &"default".to_string());
        prop_assert_eq!(map.len(), 52);
    }

    #[test]
    fn resolve_takes_first_record_in_sequence_order(
        records in prop::collection::vec(any_record(), 0..6),
    ) {
        let map = StatusMap::resolve(&records, &"default".to_string());
        for position in ToothPosition::ALL {
            let expected = records
                .iter()
                .find_map(|record| record.get(position))
                .map_or("default", String::as_str);
            prop_assert_eq!(map.get(position).map(String::as_str), Some(expected));
        }
    }
}
