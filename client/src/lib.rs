//! # authsecure-client
//!
//! Leptos + WASM frontend for the AuthSecure authentication screens: login,
//! registration, forgot-password, reset-password and a placeholder dashboard.
//!
//! Every "backend" call is mocked in-process (`net::mock_api`). The only
//! durable state is the `isLoggedIn` flag in `localStorage`, surfaced to the
//! UI through the context-provided [`state::session::SessionState`].

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
