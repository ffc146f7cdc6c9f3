use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.row_limit, 500);
    assert_eq!(state.default_database, None);
    assert!(!state.sidebar_collapsed);
    assert_eq!(state.accent_color, DEFAULT_ACCENT);
    assert_eq!(state.ai, AiSettings::default());
}

#[test]
fn parse_row_limit_accepts_offered_choices() {
    assert_eq!(parse_row_limit("1000", 500), 1000);
    assert_eq!(parse_row_limit(" 100 ", 500), 100);
}

#[test]
fn parse_row_limit_rejects_other_values() {
    assert_eq!(parse_row_limit("42", 500), 500);
    assert_eq!(parse_row_limit("lots", 1000), 1000);
    assert_eq!(parse_row_limit("", 100), 100);
}

// =============================================================
// Theme restore
// =============================================================

#[test]
fn restore_theme_applies_stored_choices() {
    let mut state = UiState::default();
    assert!(state.restore_theme(true, Some("#BC3A08")));
    assert!(state.dark_mode);
    assert_eq!(state.accent_color, "#bc3a08");
}

#[test]
fn restore_theme_reports_no_change_when_values_match() {
    let mut state = UiState::default();
    assert!(!state.restore_theme(false, None));
    assert!(!state.restore_theme(false, Some(DEFAULT_ACCENT)));
    assert_eq!(state, UiState::default());
}

#[test]
fn restore_theme_ignores_corrupt_accent() {
    let mut state = UiState::default();
    assert!(!state.restore_theme(false, Some("not-a-colour")));
    assert_eq!(state.accent_color, DEFAULT_ACCENT);
}

#[test]
fn server_and_client_start_from_the_same_state() {
    let server = UiState::default();
    let mut client = UiState::default();
    assert_eq!(server, client);
    // Stored preferences only diverge the client after the merge step.
    client.restore_theme(true, None);
    assert_ne!(server, client);
}

// =============================================================
// Accent colour
// =============================================================

#[test]
fn parse_accent_color_normalizes() {
    assert_eq!(parse_accent_color("#BC3A08"), Some("#bc3a08".to_owned()));
    assert_eq!(parse_accent_color(" #abc "), Some("#aabbcc".to_owned()));
}

#[test]
fn parse_accent_color_rejects_malformed_input() {
    for bad in ["bc3a08", "#bc3a0", "#gggggg", "#", "", "#bc3a0808"] {
        assert_eq!(parse_accent_color(bad), None, "{bad:?}");
    }
}

// =============================================================
// AI settings
// =============================================================

#[test]
fn ai_model_values_parse_back() {
    for model in AiModel::ALL {
        assert_eq!(AiModel::from_value(model.value()), Some(model));
    }
    assert_eq!(AiModel::from_value("gpt-4"), None);
    assert_eq!(AiModel::default(), AiModel::GeminiPro);
}

#[test]
fn ai_defaults_match_the_form() {
    let ai = AiSettings::default();
    assert_eq!(ai.api_key, "");
    assert_eq!(ai.temperature_tenths, 7);
    assert_eq!(ai.temperature_label(), "0.7");
    assert_eq!(AiSettings { temperature_tenths: 10, ..ai }.temperature_label(), "1.0");
}

#[test]
fn parse_temperature_accepts_unit_range() {
    assert_eq!(parse_temperature("0"), Some(0));
    assert_eq!(parse_temperature("0.3"), Some(3));
    assert_eq!(parse_temperature(" 1 "), Some(10));
    assert_eq!(parse_temperature("1.0"), Some(10));
}

#[test]
fn parse_temperature_rejects_out_of_range() {
    for bad in ["-0.1", "1.1", "warm", "", "NaN"] {
        assert_eq!(parse_temperature(bad), None, "{bad:?}");
    }
}

#[test]
fn validate_ai_settings_accepts_valid_draft() {
    assert_eq!(
        validate_ai_settings(" AIzaSyExample ", "gemini-ultra", "0.2"),
        Ok(AiSettings { api_key: "AIzaSyExample".to_owned(), model: AiModel::GeminiUltra, temperature_tenths: 2 })
    );
}

#[test]
fn validate_ai_settings_allows_missing_key() {
    assert_eq!(validate_ai_settings("", "gemini-pro", "0.7").unwrap().api_key, "");
}

#[test]
fn validate_ai_settings_rejects_bad_fields() {
    assert_eq!(validate_ai_settings("AIza Sy", "gemini-pro", "0.7"), Err("API key must not contain spaces."));
    assert_eq!(validate_ai_settings("", "gemini-nano", "0.7"), Err("Choose a supported model."));
    assert_eq!(validate_ai_settings("", "gemini-pro", "2"), Err("Temperature must be between 0 and 1."));
}
