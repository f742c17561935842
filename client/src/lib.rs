//! # client
//!
//! Leptos + WASM frontend for the pokedex catalog. Pages render prefetched
//! catalog data served by `server`; the favorites feature keeps its state
//! entirely in browser `localStorage` and never touches the network.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
