//! # epausa-client
//!
//! Leptos + WASM frontend glue for the ePauša invoicing and tax application.
//!
//! This crate contains input masks and form validation, pricing and promo
//! rules, JSON action requests, local draft persistence, and the pages and
//! components that wire them to the DOM. Everything outside `hydrate` builds
//! is pure logic and is tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install panic and log hooks, then hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
