use super::*;

#[test]
fn timestamp_formats_utc_minutes() {
    assert_eq!(timestamp(0), "1970-01-01 00:00");
    assert_eq!(timestamp(1_718_290_800_000), "2024-06-13 15:00");
}

#[test]
fn timestamp_out_of_range_is_placeholder() {
    assert_eq!(timestamp(i64::MAX), "-");
}

#[test]
fn duration_switches_to_seconds() {
    assert_eq!(duration(245), "245 ms");
    assert_eq!(duration(1500), "1.5 s");
}

#[test]
fn cell_unquotes_strings_and_names_null() {
    assert_eq!(cell(&serde_json::json!("Jane")), "Jane");
    assert_eq!(cell(&serde_json::json!(null)), "NULL");
    assert_eq!(cell(&serde_json::json!(41.5)), "41.5");
}
