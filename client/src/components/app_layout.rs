//! Shared chrome for authenticated screens: sidebar navigation and identity.
//!
//! DESIGN
//! ======
//! The layout reads the session but never writes it; logout goes through the
//! credential-exchange collaborator, and the route outlet reacts to the
//! resulting phase change by redirecting to the entry screen.

use leptos::prelude::*;

use crate::pages::databases::CONNECT_DATABASE_HREF;
use crate::router::table::Screen;
use crate::state::exchange::CredentialExchange;
use crate::state::session::SessionState;

#[component]
pub fn AppLayout(
    session: ReadSignal<SessionState>,
    exchange: CredentialExchange,
    active: Screen,
    children: Children,
) -> impl IntoView {
    let display_name = move || {
        session.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())
    };
    let email = move || session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar__brand">"QueryDesk"</div>
                <nav class="sidebar__nav">
                    {Screen::NAVIGATION
                        .into_iter()
                        .map(|screen| {
                            view! {
                                <a
                                    href=screen.path()
                                    class="sidebar__link"
                                    class:sidebar__link--active=screen == active
                                    aria-current=if screen == active { "page" } else { "false" }
                                >
                                    {screen.title()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <a class="btn btn--primary sidebar__connect" href=CONNECT_DATABASE_HREF>
                    "+ Connect Database"
                </a>
                <div class="sidebar__user">
                    <span class="sidebar__user-name">{display_name}</span>
                    <span class="sidebar__user-email">{email}</span>
                    <button class="btn sidebar__logout" on:click=move |_| exchange.logout()>
                        "Sign out"
                    </button>
                </div>
            </aside>
            <main class="app-layout__content">
                <header class="app-layout__header">
                    <h1>{active.title()}</h1>
                </header>
                {children()}
            </main>
        </div>
    }
}
