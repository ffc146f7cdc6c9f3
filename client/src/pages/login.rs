//! Login page with email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached through the unauthenticated guard. Submission runs the credential
//! exchange; on success the session phase flips and the route outlet sends the
//! user to the landing screen, so this page never navigates by itself. While
//! the exchange is in flight the outlet shows its loading view instead.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::exchange::{CredentialExchange, Credentials};
use crate::state::session::SessionState;

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns a user-facing message when a field is missing or the email has no `@`.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage(session: ReadSignal<SessionState>, exchange: CredentialExchange) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = move || session.with(|s| s.is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        let attempt = exchange.begin();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::mock_api::exchange_credentials(credentials).await;
            exchange.complete(attempt, outcome);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, attempt);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"QueryDesk"</h1>
                <p class="login-card__subtitle">"Ask your database in plain English"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="login-message">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error" role="alert">
                        {move || session.with(|s| s.error.clone().unwrap_or_default())}
                        <button
                            class="login-message__dismiss"
                            type="button"
                            aria-label="Dismiss"
                            on:click=move |_| exchange.dismiss_error()
                        >
                            "✕"
                        </button>
                    </p>
                </Show>
            </div>
        </div>
    }
}
