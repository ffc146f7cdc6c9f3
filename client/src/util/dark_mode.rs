//! Theme preference persistence.
//!
//! Reads the stored choice from `localStorage`, falling back to the system
//! `prefers-color-scheme`, and reflects it as a `data-theme` attribute on
//! `<html>`. The accent colour is stored alongside and applied as the
//! `--accent` custom property. Requires a browser; SSR and tests no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "querydesk_dark_mode";
#[cfg(feature = "hydrate")]
const ACCENT_KEY: &str = "querydesk_accent_color";

/// Value written to the `data-theme` attribute.
#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Stored preference, or the system preference when nothing is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Reflect `enabled` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Apply and persist `enabled`. Returns it for chaining into state updates.
pub fn set(enabled: bool) -> bool {
    apply(enabled);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
        }
    }
    enabled
}

/// Stored accent colour, unvalidated.
pub fn read_accent() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(ACCENT_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Inline style that overrides the stylesheet accent.
#[must_use]
pub fn accent_style(color: &str) -> String {
    format!("--accent: {color}")
}

/// Set `--accent` on the document element. The default accent clears the
/// override so each theme keeps its own stylesheet accent.
pub fn apply_accent(color: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if color == crate::state::ui::DEFAULT_ACCENT {
                let _ = el.remove_attribute("style");
            } else {
                let _ = el.set_attribute("style", &accent_style(color));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = color;
    }
}

/// Apply and persist `color`.
pub fn set_accent(color: &str) {
    apply_accent(color);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(ACCENT_KEY, color);
        }
    }
}
