//! # client
//!
//! Leptos + WASM frontend for the chemical inventory.
//!
//! The server renders [`app::App`] through `leptos_axum`; the browser build
//! (`hydrate` feature) takes over the same markup and performs every REST
//! call through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
