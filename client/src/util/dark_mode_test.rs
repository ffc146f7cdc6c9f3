#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_without_browser() {
    assert!(!read_preference());
}

#[test]
fn set_returns_requested_value() {
    assert!(set(true));
    assert!(!set(false));
}

#[test]
fn theme_name_matches_attribute_values() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn nothing_is_stored_without_browser() {
    assert_eq!(read_accent(), None);
}

#[test]
fn accent_style_sets_custom_property() {
    assert_eq!(accent_style("#bc3a08"), "--accent: #bc3a08");
}
