//! # client
//!
//! Leptos + WASM frontend for the TravelBot chat page.
//!
//! The crate renders a single chat view on the server (`ssr`) and hydrates
//! it in the browser (`hydrate`). Conversation rules live in the `assistant`
//! crate; this crate owns presentation state, timers, and markup.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
