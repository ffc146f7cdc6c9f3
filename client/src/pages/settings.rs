//! Settings page: profile, AI configuration, preferences, and security tabs.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::net::fixtures;
use crate::state::session::SessionState;
use crate::state::ui::{AiModel, ROW_LIMIT_CHOICES, UiState, parse_accent_color, parse_row_limit, validate_ai_settings};
use crate::util::{dark_mode, format};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Ai,
    Preferences,
    Security,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Ai, Self::Preferences, Self::Security];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Ai => "AI Configuration",
            Self::Preferences => "Preferences",
            Self::Security => "Security",
        }
    }
}

/// Progress of a simulated settings save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

impl SaveStatus {
    #[must_use]
    pub fn is_busy(self) -> bool {
        self == Self::Saving
    }

    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Save Changes",
            Self::Saving => "Saving...",
            Self::Saved => "Saved!",
        }
    }

    /// State after the confirmation times out. A save started meanwhile keeps
    /// its `Saving` status.
    #[must_use]
    pub fn settle(self) -> Self {
        match self {
            Self::Saved => Self::Idle,
            other => other,
        }
    }
}

/// Check a password change request before it would be submitted.
///
/// # Errors
///
/// Returns a user-facing message for the first failed rule.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() {
        return Err("Enter your current password.");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters.");
    }
    if new == current {
        return Err("New password must differ from the current one.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn SettingsPage(session: ReadSignal<SessionState>, ui: RwSignal<UiState>) -> impl IntoView {
    let tab = RwSignal::new(SettingsTab::Profile);
    let save_status = RwSignal::new(SaveStatus::Idle);

    view! {
        <div class="settings-page">
            <nav class="tabs" role="tablist">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                role="tab"
                                class:tabs__tab--active=move || tab.get() == t
                                aria-selected=move || if tab.get() == t { "true" } else { "false" }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                SettingsTab::Profile => view! { <ProfileTab session=session/> }.into_any(),
                SettingsTab::Ai => view! { <AiTab ui=ui status=save_status/> }.into_any(),
                SettingsTab::Preferences => view! { <PreferencesTab ui=ui/> }.into_any(),
                SettingsTab::Security => view! { <SecurityTab/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileTab(session: ReadSignal<SessionState>) -> impl IntoView {
    let field = move |read: fn(&crate::net::types::User) -> String| {
        move || session.with(|s| s.user.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <dl class="profile">
            <dt>"Username"</dt>
            <dd>{field(|u| u.username.clone())}</dd>
            <dt>"Email"</dt>
            <dd>{field(|u| u.email.clone())}</dd>
            <dt>"Name"</dt>
            <dd>{field(|u| u.full_name.clone().unwrap_or_else(|| "Not set".to_owned()))}</dd>
            <dt>"Verified"</dt>
            <dd>{field(|u| if u.is_verified { "Yes".to_owned() } else { "No".to_owned() })}</dd>
            <dt>"Member since"</dt>
            <dd>{field(|u| format::timestamp(u.created_at))}</dd>
        </dl>
    }
}

#[component]
fn AiTab(ui: RwSignal<UiState>, status: RwSignal<SaveStatus>) -> impl IntoView {
    let current = ui.with_untracked(|u| u.ai.clone());
    let api_key = RwSignal::new(current.api_key.clone());
    let model = RwSignal::new(current.model.value().to_owned());
    let temperature = RwSignal::new(current.temperature_label());
    let show_key = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        let settings = match validate_ai_settings(&api_key.get(), &model.get(), &temperature.get()) {
            Ok(settings) => settings,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        status.set(SaveStatus::Saving);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let saved = crate::net::mock_api::save_ai_settings(settings).await;
            log::info!("saved AI settings (model {})", saved.model.value());
            ui.update(|u| u.ai = saved);
            status.set(SaveStatus::Saved);
            crate::net::mock_api::saved_notice().await;
            status.update(|s| *s = s.settle());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            ui.update(|u| u.ai = settings);
            status.set(SaveStatus::Saved);
        }
    };

    view! {
        <form class="ai-form" on:submit=on_save>
            <label class="ai-form__row">
                "Gemini API key"
                <span class="ai-form__key">
                    <input
                        type=move || if show_key.get() { "text" } else { "password" }
                        placeholder="AIzaSy..."
                        autocomplete="off"
                        prop:value=move || api_key.get()
                        on:input=move |ev| api_key.set(event_target_value(&ev))
                    />
                    <button class="btn" type="button" on:click=move |_| show_key.update(|shown| *shown = !*shown)>
                        {move || if show_key.get() { "Hide" } else { "Show" }}
                    </button>
                </span>
            </label>
            <label class="ai-form__row">
                "Model version"
                <select prop:value=move || model.get() on:change=move |ev| model.set(event_target_value(&ev))>
                    {AiModel::ALL
                        .into_iter()
                        .map(|m| view! { <option value=m.value()>{m.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="ai-form__row">
                {move || format!("Temperature: {}", temperature.get())}
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.1"
                    prop:value=move || temperature.get()
                    on:input=move |ev| temperature.set(event_target_value(&ev))
                />
                <span class="ai-form__hint">"Lower is more precise, higher is more creative."</span>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="ai-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || status.get().is_busy()>
                {move || status.get().button_label()}
            </button>
        </form>
    }
}

#[component]
fn PreferencesTab(ui: RwSignal<UiState>) -> impl IntoView {
    let connections = fixtures::connections();
    let accent_draft = RwSignal::new(ui.with_untracked(|u| u.accent_color.clone()));
    let accent_invalid = RwSignal::new(false);
    let on_accent = move |raw: String| {
        match parse_accent_color(&raw) {
            Some(color) => {
                accent_invalid.set(false);
                dark_mode::set_accent(&color);
                ui.update(|u| u.accent_color = color);
            }
            None => accent_invalid.set(true),
        }
        accent_draft.set(raw);
    };

    view! {
        <div class="preferences">
            <label class="preferences__row">
                <input
                    type="checkbox"
                    prop:checked=move || ui.with(|u| u.dark_mode)
                    on:change=move |ev| {
                        let enabled = dark_mode::set(event_target_checked(&ev));
                        ui.update(|u| u.dark_mode = enabled);
                    }
                />
                "Dark mode"
            </label>
            <label class="preferences__row">
                "Accent colour"
                <span class="preferences__accent">
                    <input
                        type="color"
                        prop:value=move || ui.with(|u| u.accent_color.clone())
                        on:input=move |ev| on_accent(event_target_value(&ev))
                    />
                    <input
                        class="preferences__accent-text"
                        type="text"
                        spellcheck="false"
                        prop:value=move || accent_draft.get()
                        on:input=move |ev| on_accent(event_target_value(&ev))
                    />
                </span>
            </label>
            <Show when=move || accent_invalid.get()>
                <p class="preferences__error">"Use a colour like #bc3a08."</p>
            </Show>
            <label class="preferences__row">
                "Result row limit"
                <select
                    prop:value=move || ui.with(|u| u.row_limit.to_string())
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        ui.update(|u| u.row_limit = parse_row_limit(&raw, u.row_limit));
                    }
                >
                    {ROW_LIMIT_CHOICES
                        .into_iter()
                        .map(|limit| view! { <option value=limit.to_string()>{limit.to_string()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="preferences__row">
                "Default database"
                <select
                    prop:value=move || ui.with(|u| u.default_database.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        ui.update(|u| u.default_database = (!id.is_empty()).then_some(id));
                    }
                >
                    <option value="">"First available"</option>
                    {connections
                        .into_iter()
                        .map(|c| view! { <option value=c.id>{c.name}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}

#[component]
fn SecurityTab() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(None::<Result<&'static str, &'static str>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = validate_password_change(&current.get(), &new.get(), &confirm.get());
        if outcome.is_ok() {
            current.set(String::new());
            new.set(String::new());
            confirm.set(String::new());
        }
        message.set(Some(outcome.map(|()| "Password updated.")));
    };

    let input = move |signal: RwSignal<String>, placeholder: &'static str, autocomplete: &'static str| {
        view! {
            <input
                type="password"
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form class="security-form" on:submit=on_submit>
            {input(current, "Current password", "current-password")}
            {input(new, "New password", "new-password")}
            {input(confirm, "Confirm new password", "new-password")}
            {move || {
                message
                    .get()
                    .map(|outcome| match outcome {
                        Ok(text) => view! { <p class="security-form__ok">{text}</p> }.into_any(),
                        Err(text) => view! { <p class="security-form__error">{text}</p> }.into_any(),
                    })
            }}
            <button class="btn btn--primary" type="submit">"Change password"</button>
        </form>
    }
}
