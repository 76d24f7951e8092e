//! # client
//!
//! Leptos + WASM frontend for the role-gated portals. Every route renders
//! behind [`components::auth_guard::AuthGuard`], which reads the session slot
//! on each navigation and either shows the page or redirects.
//!
//! Routing and session rules live in the `guards` crate; this crate supplies
//! the browser `localStorage` slot, the reactive auth state, and the pages.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
