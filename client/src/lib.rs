//! # client
//!
//! Leptos + WASM frontend for QueryDesk, a natural-language-to-SQL dashboard.
//!
//! This crate contains the session store and its credential-exchange
//! collaborator, the guarded route table, pages, components, and the
//! simulated backend the pages talk to.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
