//! Database connections page: list, add, test, and remove connections.
//!
//! TRADE-OFFS
//! ==========
//! Connections live only in page state. Nothing is persisted and no real
//! driver is involved; "Test" runs the simulated connection check.

#[cfg(test)]
#[path = "databases_test.rs"]
mod databases_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingIndicator;
use crate::net::types::{ConnectionStatus, DatabaseConnection, DatabaseKind};
use crate::util::format;

/// Link that opens this page with the add-connection form expanded.
pub const CONNECT_DATABASE_HREF: &str = "/databases?connect=1";

/// Whether a query string asks for the add-connection form.
#[must_use]
pub fn wants_add_form(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair.split('=').next() == Some("connect"))
}

/// Raw add-connection form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionForm {
    pub name: String,
    pub kind: DatabaseKind,
    pub host: String,
    pub port: String,
    pub username: String,
    /// Checked on submit, then dropped.
    pub password: String,
    pub database: String,
}

impl ConnectionForm {
    /// Empty form with the default engine's port filled in.
    #[must_use]
    pub fn new() -> Self {
        let mut form = Self::default();
        form.set_kind(DatabaseKind::default());
        form
    }

    /// Switch engine and reset the port to its conventional default.
    pub fn set_kind(&mut self, kind: DatabaseKind) {
        self.kind = kind;
        self.port = kind.default_port().map(|p| p.to_string()).unwrap_or_default();
    }
}

/// Validate the form into a new, untested connection.
///
/// Server engines need host, port, username, password and database. SQLite
/// is file-based: only the name is required and the database path may be
/// left empty.
///
/// # Errors
///
/// Returns a user-facing message for the first invalid field.
pub fn validate_connection_form(form: &ConnectionForm) -> Result<DatabaseConnection, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Give the connection a name.");
    }
    let database = form.database.trim();
    let (host, port, username) = if form.kind.is_file_based() {
        (String::new(), 0, String::new())
    } else {
        let host = form.host.trim();
        if host.is_empty() {
            return Err("Enter a host.");
        }
        let port = form
            .port
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or("Port must be between 1 and 65535.")?;
        let username = form.username.trim();
        if username.is_empty() {
            return Err("Enter a username.");
        }
        if form.password.trim().is_empty() {
            return Err("Enter a password.");
        }
        if database.is_empty() {
            return Err("Enter a database name.");
        }
        (host.to_owned(), port, username.to_owned())
    };
    Ok(DatabaseConnection {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_owned(),
        kind: form.kind,
        host,
        port,
        username,
        database: database.to_owned(),
        status: ConnectionStatus::Disconnected,
        last_used_at: None,
    })
}

/// Update the status of `id`. Returns whether a connection matched.
pub fn set_status(items: &mut [DatabaseConnection], id: &str, status: ConnectionStatus) -> bool {
    match items.iter_mut().find(|c| c.id == id) {
        Some(conn) => {
            conn.status = status;
            true
        }
        None => false,
    }
}

#[component]
pub fn DatabasesPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<DatabaseConnection>::new());
    let loading = RwSignal::new(true);
    let testing = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let form = RwSignal::new(ConnectionForm::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let location = use_location();
    Effect::new(move || {
        if location.search.with(|search| wants_add_form(search)) {
            show_form.set(true);
        }
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        items.set(crate::net::mock_api::list_connections().await);
        loading.set(false);
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(validate_connection_form) {
            Ok(conn) => {
                log::info!("added connection {} ({})", conn.name, conn.kind.label());
                items.update(|all| all.push(conn));
                form.set(ConnectionForm::new());
                form_error.set(None);
                show_form.set(false);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    let run_test = move |id: String| {
        if testing.get_untracked().is_some() {
            return;
        }
        let Some(conn) = items.with_untracked(|all| all.iter().find(|c| c.id == id).cloned()) else {
            return;
        };
        testing.set(Some(id.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let status = crate::net::mock_api::test_connection(conn).await;
            items.update(|all| {
                set_status(all, &id, status);
            });
            testing.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let status = crate::net::fixtures::check_connection(&conn);
            items.update(|all| {
                set_status(all, &id, status);
            });
            testing.set(None);
        }
    };

    view! {
        <div class="databases-page">
            <div class="databases-page__actions">
                <button class="btn btn--primary" on:click=move |_| show_form.update(|open| *open = !*open)>
                    {move || if show_form.get() { "Close" } else { "+ Add connection" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="connection-form" on:submit=on_add>
                    <input
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || form.with(|f| f.kind.value())
                        on:change=move |ev| {
                            let kind = DatabaseKind::from_value(&event_target_value(&ev)).unwrap_or_default();
                            form.update(|f| f.set_kind(kind));
                        }
                    >
                        {DatabaseKind::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.value()>{k.label()}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || form.with(|f| !f.kind.is_file_based())>
                        <input
                            placeholder="Host"
                            prop:value=move || form.with(|f| f.host.clone())
                            on:input=move |ev| form.update(|f| f.host = event_target_value(&ev))
                        />
                        <input
                            placeholder="Port"
                            inputmode="numeric"
                            prop:value=move || form.with(|f| f.port.clone())
                            on:input=move |ev| form.update(|f| f.port = event_target_value(&ev))
                        />
                        <input
                            placeholder="Username"
                            autocomplete="off"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        <div class="connection-form__password">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| show_password.update(|shown| *shown = !*shown)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </Show>
                    <input
                        placeholder=move || {
                            if form.with(|f| f.kind.is_file_based()) { "Database file (optional)" } else { "Database" }
                        }
                        prop:value=move || form.with(|f| f.database.clone())
                        on:input=move |ev| form.update(|f| f.database = event_target_value(&ev))
                    />
                    <Show when=move || form_error.get().is_some()>
                        <p class="connection-form__error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator label="Loading connections..."/> }>
                <ul class="connection-list">
                    <For
                        each=move || items.get()
                        key=|c| (c.id.clone(), c.status)
                        children=move |conn| {
                            let test_id = conn.id.clone();
                            let remove_id = conn.id.clone();
                            let busy_id = conn.id.clone();
                            let endpoint = if conn.kind.is_file_based() {
                                if conn.database.is_empty() { ":memory:".to_owned() } else { conn.database.clone() }
                            } else {
                                format!("{}@{}:{}/{}", conn.username, conn.host, conn.port, conn.database)
                            };
                            view! {
                                <li class="connection">
                                    <div class="connection__head">
                                        <span class="connection__name">{conn.name.clone()}</span>
                                        <span class="connection__kind">{conn.kind.label()}</span>
                                        <span class=format!(
                                            "connection__status connection__status--{}",
                                            conn.status.label().to_lowercase(),
                                        )>{conn.status.label()}</span>
                                    </div>
                                    <div class="connection__meta">
                                        <span>{endpoint}</span>
                                        <span>
                                            {conn.last_used_at.map_or_else(|| "Never used".to_owned(), format::timestamp)}
                                        </span>
                                    </div>
                                    <div class="connection__actions">
                                        <button
                                            class="btn"
                                            disabled=move || testing.get().is_some()
                                            on:click=move |_| run_test(test_id.clone())
                                        >
                                            {move || {
                                                if testing.get().as_deref() == Some(busy_id.as_str()) {
                                                    "Testing..."
                                                } else {
                                                    "Test"
                                                }
                                            }}
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| items.update(|all| all.retain(|c| c.id != remove_id))
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
