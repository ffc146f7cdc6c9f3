use super::*;
use crate::net::fixtures;

fn ids(items: &[QueryRecord]) -> Vec<&str> {
    items.iter().map(|q| q.id.as_str()).collect()
}

#[test]
fn empty_search_returns_everything_newest_first() {
    let mut items = fixtures::history();
    items.reverse();
    let result = filter_history(&items, "", StatusFilter::All, false);
    assert_eq!(ids(&result), vec!["q-5", "q-4", "q-3", "q-2", "q-1"]);
}

#[test]
fn search_matches_prompt_case_insensitively() {
    let result = filter_history(&fixtures::history(), "REVENUE", StatusFilter::All, false);
    assert_eq!(ids(&result), vec!["q-5"]);
}

#[test]
fn search_matches_sql_text() {
    let result = filter_history(&fixtures::history(), "units_sold", StatusFilter::All, false);
    assert_eq!(ids(&result), vec!["q-3"]);
}

#[test]
fn status_filter_keeps_only_failures() {
    let result = filter_history(&fixtures::history(), "", StatusFilter::Error, false);
    assert_eq!(ids(&result), vec!["q-2"]);
}

#[test]
fn favorites_only_combines_with_status() {
    let result = filter_history(&fixtures::history(), "", StatusFilter::Success, true);
    assert_eq!(ids(&result), vec!["q-5", "q-3"]);
}

#[test]
fn toggle_favorite_flips_matching_record() {
    let mut items = fixtures::history();
    assert!(toggle_favorite(&mut items, "q-1"));
    assert!(items.iter().find(|q| q.id == "q-1").unwrap().favorite);
    assert!(toggle_favorite(&mut items, "q-1"));
    assert!(!items.iter().find(|q| q.id == "q-1").unwrap().favorite);
}

#[test]
fn toggle_favorite_unknown_id_is_noop() {
    let mut items = fixtures::history();
    let before = items.clone();
    assert!(!toggle_favorite(&mut items, "missing"));
    assert_eq!(items, before);
}

#[test]
fn status_filter_value_parses_back() {
    for filter in StatusFilter::ALL {
        assert_eq!(StatusFilter::from_value(filter.value()), filter);
    }
    assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
}
