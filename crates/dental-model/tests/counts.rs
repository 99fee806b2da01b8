#![allow(missing_docs)]

use dental_model::{ChartMode, SparseRecord, StatusMap, ToothPosition, aggregate_counts};

fn split_mapping() -> StatusMap<String> {
    // All 32 permanent teeth "A", all 20 deciduous teeth "B".
    let deciduous: SparseRecord<String> = ToothPosition::DECIDUOUS
        .into_iter()
        .map(|position| (position, "B".to_string()))
        .collect();
    StatusMap::resolve(&[deciduous], &"A".to_string())
}

#[test]
fn aggregation_scoped_to_permanent() {
    let counts = aggregate_counts(&split_mapping(), ChartMode::Permanent);
    assert_eq!(counts.get("A").copied(), Some(32));
    assert!(!counts.contains_key("B"));
    assert_eq!(counts.len(), 1);
}

#[test]
fn aggregation_scoped_to_deciduous() {
    let counts = aggregate_counts(&split_mapping(), ChartMode::Deciduous);
    assert_eq!(counts.get("B").copied(), Some(20));
    assert!(!counts.contains_key("A"));
}

#[test]
fn aggregation_combined_counts_everything() {
    let counts = aggregate_counts(&split_mapping(), ChartMode::Combined);
    assert_eq!(counts.get("A").copied(), Some(32));
    assert_eq!(counts.get("B").copied(), Some(20));
}

#[test]
fn zero_count_statuses_are_absent() {
    let mapping = StatusMap::resolve(&[], &"A".to_string());
    let counts = aggregate_counts(&mapping, ChartMode::Combined);
    assert_eq!(counts.get("A").copied(), Some(52));
    assert_eq!(counts.len(), 1);
}

#[test]
fn empty_previous_mapping_counts_nothing() {
    let counts = aggregate_counts(&StatusMap::<String>::default(), ChartMode::Combined);
    assert!(counts.is_empty());
}
