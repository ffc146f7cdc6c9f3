//! Dashboard page: natural-language prompt to SQL, with a mock run.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Connections and history load from
//! the simulated backend on mount; generation and execution each wait on an
//! artificial delay while their buttons stay disabled.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::components::result_table::ResultTable;
use crate::net::types::{DatabaseConnection, QueryRecord, QueryResult, QueryStatus};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::format;

/// Longest prompt accepted by the generator.
pub const MAX_PROMPT_CHARS: usize = 2000;

/// Aggregates shown in the dashboard summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub total: usize,
    /// Whole-percent share of successful runs; 0 when there is no history.
    pub success_rate_pct: u32,
    pub avg_duration_ms: u32,
}

/// Trim the prompt and enforce presence and length.
///
/// # Errors
///
/// Returns a user-facing message for empty or oversized prompts.
pub fn validate_prompt(raw: &str) -> Result<String, &'static str> {
    let prompt = raw.trim();
    if prompt.is_empty() {
        return Err("Describe the data you want first.");
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err("Prompt is too long (2000 characters max).");
    }
    Ok(prompt.to_owned())
}

#[must_use]
pub fn summarize(history: &[QueryRecord]) -> HistoryStats {
    if history.is_empty() {
        return HistoryStats::default();
    }
    let total = history.len();
    let successes = history.iter().filter(|q| q.status == QueryStatus::Success).count();
    let duration_sum: u64 = history.iter().map(|q| u64::from(q.duration_ms)).sum();
    let total_u64 = total as u64;
    HistoryStats {
        total,
        success_rate_pct: u32::try_from(successes as u64 * 100 / total_u64).unwrap_or(100),
        avg_duration_ms: u32::try_from(duration_sum / total_u64).unwrap_or(u32::MAX),
    }
}

/// Preferred connection when it still exists, otherwise the first one.
#[must_use]
pub fn initial_database(connections: &[DatabaseConnection], preferred: Option<&str>) -> Option<String> {
    preferred
        .filter(|id| connections.iter().any(|c| c.id == *id))
        .map(str::to_owned)
        .or_else(|| connections.first().map(|c| c.id.clone()))
}

#[component]
pub fn DashboardPage(session: ReadSignal<SessionState>, ui: RwSignal<UiState>) -> impl IntoView {
    let connections = RwSignal::new(Vec::<DatabaseConnection>::new());
    let history = RwSignal::new(Vec::<QueryRecord>::new());
    let loading = RwSignal::new(true);
    let selected_db = RwSignal::new(None::<String>);

    let prompt = RwSignal::new(String::new());
    let prompt_error = RwSignal::new(None::<&'static str>);
    let generated_sql = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);
    let result = RwSignal::new(None::<QueryResult>);
    let running = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let conns = crate::net::mock_api::list_connections().await;
        let items = crate::net::mock_api::list_history().await;
        let preferred = ui.with_untracked(|u| u.default_database.clone());
        selected_db.set(initial_database(&conns, preferred.as_deref()));
        connections.set(conns);
        history.set(items);
        loading.set(false);
    });

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if generating.get() {
            return;
        }
        let text = match validate_prompt(&prompt.get()) {
            Ok(text) => text,
            Err(message) => {
                prompt_error.set(Some(message));
                return;
            }
        };
        prompt_error.set(None);
        result.set(None);
        generating.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let sql = crate::net::mock_api::generate_sql(text).await;
            generated_sql.set(Some(sql));
            generating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            generated_sql.set(Some(crate::net::fixtures::sql_for_prompt(&text)));
            generating.set(false);
        }
    };

    let on_run = move |_: leptos::ev::MouseEvent| {
        let Some(sql) = generated_sql.get() else {
            return;
        };
        if running.get() {
            return;
        }
        running.set(true);
        let row_limit = ui.with_untracked(|u| u.row_limit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let rows = crate::net::mock_api::run_query(sql, row_limit).await;
            result.set(Some(rows));
            running.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            result.set(Some(crate::net::fixtures::sample_result(&sql, row_limit)));
            running.set(false);
        }
    };

    let stats = move || history.with(|items| summarize(items));
    let greeting = move || {
        session.with(|s| s.user.as_ref().map(|u| format!("Welcome back, {}", u.display_name())).unwrap_or_default())
    };

    view! {
        <div class="dashboard-page">
            <p class="dashboard-page__greeting">{greeting}</p>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator label="Loading workspace..."/> }>
                <section class="stats">
                    <div class="stats__card">
                        <span class="stats__value">{move || stats().total}</span>
                        <span class="stats__label">"Queries"</span>
                    </div>
                    <div class="stats__card">
                        <span class="stats__value">{move || format!("{}%", stats().success_rate_pct)}</span>
                        <span class="stats__label">"Success rate"</span>
                    </div>
                    <div class="stats__card">
                        <span class="stats__value">{move || format::duration(stats().avg_duration_ms)}</span>
                        <span class="stats__label">"Avg. duration"</span>
                    </div>
                </section>

                <form class="prompt-form" on:submit=on_generate>
                    <label class="prompt-form__label">
                        "Database"
                        <select
                            class="prompt-form__select"
                            prop:value=move || selected_db.get().unwrap_or_default()
                            on:change=move |ev| selected_db.set(Some(event_target_value(&ev)))
                        >
                            <For
                                each=move || connections.get()
                                key=|conn| conn.id.clone()
                                children=move |conn| {
                                    view! { <option value=conn.id.clone()>{conn.name.clone()}</option> }
                                }
                            />
                        </select>
                    </label>
                    <textarea
                        class="prompt-form__input"
                        rows="4"
                        placeholder="e.g. Show monthly revenue for this year"
                        prop:value=move || prompt.get()
                        on:input=move |ev| prompt.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || prompt_error.get().is_some()>
                        <p class="prompt-form__error">{move || prompt_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate SQL" }}
                    </button>
                </form>

                <Show when=move || generated_sql.get().is_some()>
                    <section class="sql-preview">
                        <pre class="sql-preview__code">{move || generated_sql.get().unwrap_or_default()}</pre>
                        <button class="btn" on:click=on_run disabled=move || running.get()>
                            {move || if running.get() { "Running..." } else { "Run query" }}
                        </button>
                    </section>
                </Show>

                {move || result.get().map(|r| view! { <ResultTable result=r/> })}
            </Show>
        </div>
    }
}
