//! # lernplattform-client
//!
//! Leptos + WASM frontend for the learning platform.
//!
//! This crate contains the route table and navigation guard, the session,
//! course-draft and tutorial state stores, the REST client for the auth
//! endpoints, and the pages/components that wire them together.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
