//! # client
//!
//! Leptos + WASM frontend for the MultiVA dashboard.
//!
//! This crate contains the app shell, the `Index` page and its cards, and the
//! browser networking for the dashboard summary and the landmass. It
//! integrates with the `globe` crate for imperative canvas rendering via the
//! `GlobePanel` bridge component and with the `metrics` crate for every
//! number the cards display.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
