//! Root application component: composition root and routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::router::outlet::RouteOutlet;
use crate::router::table::RouteTable;
use crate::state::exchange::CredentialExchange;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store, its credential-exchange collaborator, and the
/// route table once, then passes them down explicitly. Leptos routes only
/// capture the location; `RouteOutlet` decides what it means.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let exchange = CredentialExchange::new(session);
    let routes = StoredValue::new(RouteTable::standard());
    // Same starting state on server and client; browser-stored theme choices
    // are merged once the app has hydrated.
    let ui = RwSignal::new(UiState::default());
    Effect::new(move || {
        let mut next = ui.get_untracked();
        if next.restore_theme(dark_mode::read_preference(), dark_mode::read_accent().as_deref()) {
            ui.set(next);
        }
    });

    Effect::new(move || dark_mode::apply(ui.with(|u| u.dark_mode)));
    Effect::new(move || ui.with(|u| dark_mode::apply_accent(&u.accent_color)));

    let outlet = move || view! { <RouteOutlet routes=routes session=session exchange=exchange ui=ui/> };

    view! {
        <Stylesheet id="leptos" href="/pkg/querydesk.css"/>
        <Title text="QueryDesk"/>

        <Router>
            <Routes fallback=outlet>
                <Route path=StaticSegment("") view=outlet/>
                <Route path=WildcardSegment("path") view=outlet/>
            </Routes>
        </Router>
    }
}
