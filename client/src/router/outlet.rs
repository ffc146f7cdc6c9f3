//! Route outlet: resolves the current location against the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation (and every session phase change) re-resolves through
//! `RouteTable::resolve`. The resolution is memoized, so transitions that do
//! not change the outcome (for example, setting an error message) leave the
//! mounted screen and its form state alone.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::table::{Resolution, RouteTable, Screen};
use crate::components::app_layout::AppLayout;
use crate::components::loading::LoadingIndicator;
use crate::pages::{
    dashboard::DashboardPage, databases::DatabasesPage, history::HistoryPage, login::LoginPage,
    settings::SettingsPage,
};
use crate::state::exchange::CredentialExchange;
use crate::state::session::{SessionState, SessionStore};
use crate::state::ui::UiState;

#[component]
pub fn RouteOutlet(
    routes: StoredValue<RouteTable>,
    session: SessionStore,
    exchange: CredentialExchange,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let location = use_location();
    let reader = session.reader();
    let resolution = Memo::new(move |_| {
        let path = location.pathname.get();
        let phase = session.phase();
        routes.with_value(|table| table.resolve(&path, phase))
    });

    move || match resolution.get() {
        Resolution::Loading => view! {
            <div class="pending">
                <LoadingIndicator label="Checking your session..."/>
                <button class="btn" type="button" on:click=move |_| exchange.cancel()>
                    "Cancel"
                </button>
            </div>
        }
        .into_any(),
        Resolution::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        Resolution::Render(screen) => render_screen(screen, reader, exchange, ui),
    }
}

fn render_screen(
    screen: Screen,
    session: ReadSignal<SessionState>,
    exchange: CredentialExchange,
    ui: RwSignal<UiState>,
) -> AnyView {
    let page = match screen {
        Screen::Login => return view! { <LoginPage session=session exchange=exchange/> }.into_any(),
        Screen::Dashboard => view! { <DashboardPage session=session ui=ui/> }.into_any(),
        Screen::History => view! { <HistoryPage/> }.into_any(),
        Screen::Databases => view! { <DatabasesPage/> }.into_any(),
        Screen::Settings => view! { <SettingsPage session=session ui=ui/> }.into_any(),
    };
    view! {
        <AppLayout session=session exchange=exchange active=screen>
            {page}
        </AppLayout>
    }
    .into_any()
}
