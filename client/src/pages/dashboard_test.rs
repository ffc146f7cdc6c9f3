use super::*;
use crate::net::fixtures;

#[test]
fn validate_prompt_trims() {
    assert_eq!(validate_prompt("  top products \n"), Ok("top products".to_owned()));
}

#[test]
fn validate_prompt_rejects_blank() {
    assert_eq!(validate_prompt(" \t "), Err("Describe the data you want first."));
}

#[test]
fn validate_prompt_enforces_length_in_chars() {
    let at_limit = "é".repeat(MAX_PROMPT_CHARS);
    assert!(validate_prompt(&at_limit).is_ok());
    let over = "a".repeat(MAX_PROMPT_CHARS + 1);
    assert_eq!(validate_prompt(&over), Err("Prompt is too long (2000 characters max)."));
}

#[test]
fn summarize_empty_history_is_zeroed() {
    assert_eq!(summarize(&[]), HistoryStats::default());
}

#[test]
fn summarize_fixture_history() {
    let stats = summarize(&fixtures::history());
    assert_eq!(stats.total, 5);
    assert_eq!(stats.success_rate_pct, 80);
    assert_eq!(stats.avg_duration_ms, (245 + 120 + 310 + 15 + 88) / 5);
}

#[test]
fn initial_database_prefers_existing_choice() {
    let conns = fixtures::connections();
    assert_eq!(initial_database(&conns, Some("db-2")), Some("db-2".to_owned()));
}

#[test]
fn initial_database_falls_back_to_first() {
    let conns = fixtures::connections();
    assert_eq!(initial_database(&conns, Some("gone")), Some("db-1".to_owned()));
    assert_eq!(initial_database(&conns, None), Some("db-1".to_owned()));
    assert_eq!(initial_database(&[], Some("db-1")), None);
}
