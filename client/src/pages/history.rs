//! Query history page with search, status filter, and favourites.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::net::types::{QueryRecord, QueryStatus};
use crate::util::format;

/// Status filter offered above the history list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Error,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Success, Self::Error];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Success => "Successful",
            Self::Error => "Failed",
        }
    }

    /// Unknown values fall back to `All`.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == raw).unwrap_or_default()
    }

    fn admits(self, status: QueryStatus) -> bool {
        match self {
            Self::All => true,
            Self::Success => status == QueryStatus::Success,
            Self::Error => status == QueryStatus::Error,
        }
    }
}

/// Records matching a case-insensitive search over prompt and SQL, newest first.
#[must_use]
pub fn filter_history(items: &[QueryRecord], search: &str, status: StatusFilter, favorites_only: bool) -> Vec<QueryRecord> {
    let needle = search.trim().to_lowercase();
    let mut matches: Vec<QueryRecord> = items
        .iter()
        .filter(|q| status.admits(q.status))
        .filter(|q| !favorites_only || q.favorite)
        .filter(|q| {
            needle.is_empty() || q.prompt.to_lowercase().contains(&needle) || q.sql.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    matches.sort_by(|a, b| b.executed_at.cmp(&a.executed_at));
    matches
}

/// Flip the favourite flag of `id`. Returns whether a record matched.
pub fn toggle_favorite(items: &mut [QueryRecord], id: &str) -> bool {
    match items.iter_mut().find(|q| q.id == id) {
        Some(record) => {
            record.favorite = !record.favorite;
            true
        }
        None => false,
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<QueryRecord>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(StatusFilter::All);
    let favorites_only = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        items.set(crate::net::mock_api::list_history().await);
        loading.set(false);
    });

    let visible = move || items.with(|all| filter_history(all, &search.get(), status.get(), favorites_only.get()));

    view! {
        <div class="history-page">
            <div class="history-page__filters">
                <input
                    class="history-page__search"
                    type="search"
                    placeholder="Search prompts or SQL"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="history-page__status"
                    prop:value=move || status.get().value()
                    on:change=move |ev| status.set(StatusFilter::from_value(&event_target_value(&ev)))
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                        .collect_view()}
                </select>
                <label class="history-page__favorites">
                    <input
                        type="checkbox"
                        prop:checked=move || favorites_only.get()
                        on:change=move |ev| favorites_only.set(event_target_checked(&ev))
                    />
                    "Favourites only"
                </label>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator label="Loading history..."/> }>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="history-page__empty">"No queries match your filters."</p> }
                >
                    <ul class="history-list">
                        <For
                            each=visible
                            key=|q| (q.id.clone(), q.favorite)
                            children=move |q| {
                                let id = q.id.clone();
                                view! {
                                    <li class="history-item" class:history-item--error=q.status == QueryStatus::Error>
                                        <div class="history-item__head">
                                            <span class="history-item__prompt">{q.prompt.clone()}</span>
                                            <button
                                                class="history-item__favorite"
                                                aria-pressed=if q.favorite { "true" } else { "false" }
                                                title="Toggle favourite"
                                                on:click=move |_| {
                                                    items.update(|all| {
                                                        toggle_favorite(all, &id);
                                                    });
                                                }
                                            >
                                                {if q.favorite { "★" } else { "☆" }}
                                            </button>
                                        </div>
                                        <pre class="history-item__sql">{q.sql.clone()}</pre>
                                        <div class="history-item__meta">
                                            <span>{q.database.clone()}</span>
                                            <span>{format::timestamp(q.executed_at)}</span>
                                            <span>{format::duration(q.duration_ms)}</span>
                                            <span>{format!("{} rows", q.row_count)}</span>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
