//! Local UI preferences (theme, result limits, default connection, AI model).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of session state so settings screens can
//! evolve without touching the authentication contract.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Row limits offered by the preferences tab.
pub const ROW_LIMIT_CHOICES: [u32; 4] = [100, 500, 1000, 5000];

/// Accent colour used until the user picks another.
pub const DEFAULT_ACCENT: &str = "#2563eb";

/// Temperature in tenths, so 7 means 0.7.
pub const DEFAULT_TEMPERATURE_TENTHS: u8 = 7;

/// Generation models offered by the AI tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AiModel {
    #[default]
    GeminiPro,
    GeminiProVision,
    GeminiUltra,
}

impl AiModel {
    pub const ALL: [Self; 3] = [Self::GeminiPro, Self::GeminiProVision, Self::GeminiUltra];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::GeminiPro => "gemini-pro",
            Self::GeminiProVision => "gemini-pro-vision",
            Self::GeminiUltra => "gemini-ultra",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GeminiPro => "Gemini Pro",
            Self::GeminiProVision => "Gemini Pro Vision",
            Self::GeminiUltra => "Gemini Ultra (Preview)",
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == raw.trim())
    }
}

/// Settings for AI-assisted SQL generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiSettings {
    /// Empty when no key is configured.
    pub api_key: String,
    pub model: AiModel,
    /// Sampling temperature in tenths, `0..=10`.
    pub temperature_tenths: u8,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self { api_key: String::new(), model: AiModel::default(), temperature_tenths: DEFAULT_TEMPERATURE_TENTHS }
    }
}

impl AiSettings {
    /// Temperature as shown to the user, e.g. `0.7`.
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}.{}", self.temperature_tenths / 10, self.temperature_tenths % 10)
    }
}

/// UI preferences shared by the dashboard and settings screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// `#rrggbb`, lowercase.
    pub accent_color: String,
    /// Maximum rows shown in a result table.
    pub row_limit: u32,
    /// Connection id preselected on the dashboard.
    pub default_database: Option<String>,
    pub sidebar_collapsed: bool,
    pub ai: AiSettings,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            accent_color: DEFAULT_ACCENT.to_owned(),
            row_limit: ROW_LIMIT_CHOICES[1],
            default_database: None,
            sidebar_collapsed: false,
            ai: AiSettings::default(),
        }
    }
}

impl UiState {
    /// Merge browser-stored theme choices into this state. Invalid stored
    /// colours are ignored. Returns whether anything changed.
    pub fn restore_theme(&mut self, dark_mode: bool, accent: Option<&str>) -> bool {
        let accent = accent.and_then(parse_accent_color);
        let mut changed = false;
        if self.dark_mode != dark_mode {
            self.dark_mode = dark_mode;
            changed = true;
        }
        if let Some(accent) = accent {
            if self.accent_color != accent {
                self.accent_color = accent;
                changed = true;
            }
        }
        changed
    }
}

/// Parse a row-limit `<select>` value, falling back to the current limit when
/// the value is not one of the offered choices.
#[must_use]
pub fn parse_row_limit(raw: &str, current: u32) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|limit| ROW_LIMIT_CHOICES.contains(limit))
        .unwrap_or(current)
}

/// Normalize `#rgb` or `#rrggbb` to lowercase `#rrggbb`.
#[must_use]
pub fn parse_accent_color(raw: &str) -> Option<String> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let full = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_owned(),
        _ => return None,
    };
    Some(format!("#{}", full.to_ascii_lowercase()))
}

/// Parse a temperature slider value (`0.0` to `1.0`) into tenths.
#[must_use]
pub fn parse_temperature(raw: &str) -> Option<u8> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !(0.0..=1.0).contains(&value) {
        return None;
    }
    // Range-checked above, so the rounded value fits in 0..=10.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let tenths = (value * 10.0).round() as u8;
    Some(tenths)
}

/// Validate the AI tab's draft fields.
///
/// # Errors
///
/// Returns a user-facing message for an unknown model, a malformed key, or an
/// out-of-range temperature.
pub fn validate_ai_settings(api_key: &str, model: &str, temperature: &str) -> Result<AiSettings, &'static str> {
    let api_key = api_key.trim();
    if api_key.chars().any(char::is_whitespace) {
        return Err("API key must not contain spaces.");
    }
    let model = AiModel::from_value(model).ok_or("Choose a supported model.")?;
    let temperature_tenths = parse_temperature(temperature).ok_or("Temperature must be between 0 and 1.")?;
    Ok(AiSettings { api_key: api_key.to_owned(), model, temperature_tenths })
}
