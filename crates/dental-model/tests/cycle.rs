#![allow(missing_docs)]

use std::collections::HashMap;

use dental_model::next_status;

fn hidden(statuses: &[&str]) -> HashMap<String, bool> {
    statuses
        .iter()
        .map(|status| ((*status).to_string(), true))
        .collect()
}

fn order(statuses: &[&str]) -> Vec<String> {
    statuses.iter().map(|status| (*status).to_string()).collect()
}

#[test]
fn cycle_advances_in_order() {
    let order = order(&["A", "B", "C"]);
    let none = HashMap::new();
    assert_eq!(next_status(&"A".to_string(), &order, &none), "B");
    assert_eq!(next_status(&"B".to_string(), &order, &none), "C");
}

#[test]
fn cycle_wraps_around() {
    let order = order(&["A", "B", "C"]);
    assert_eq!(next_status(&"C".to_string(), &order, &HashMap::new()), "A");
}

#[test]
fn cycle_skips_hidden() {
    let order = order(&["A", "B", "C"]);
    assert_eq!(next_status(&"A".to_string(), &order, &hidden(&["B"])), "C");
}

#[test]
fn cycle_from_hidden_current_restarts_at_first_visible() {
    let order = order(&["A", "B", "C"]);
    assert_eq!(next_status(&"B".to_string(), &order, &hidden(&["B"])), "A");
}

#[test]
fn cycle_handles_unknown_current() {
    let order = order(&["A", "B"]);
    assert_eq!(next_status(&"Z".to_string(), &order, &HashMap::new()), "A");
}

#[test]
fn cycle_with_everything_hidden_is_a_no_op() {
    let order = order(&["A", "B"]);
    assert_eq!(next_status(&"A".to_string(), &order, &hidden(&["A", "B"])), "A");
}

#[test]
fn cycle_treats_explicit_false_as_visible() {
    let order = order(&["A", "B"]);
    let mut flags = HashMap::new();
    flags.insert("B".to_string(), false);
    assert_eq!(next_status(&"A".to_string(), &order, &flags), "B");
}
