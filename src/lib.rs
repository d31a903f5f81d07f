//! # courtside
//!
//! Leptos + WASM frontend for the NBA three-point analytics dashboards.
//!
//! This crate contains the login and signup flows, the persisted session, the
//! route guard for protected views, and the favorite-team report lookup. The
//! authentication service is reached over HTTP; everything else runs in the
//! browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: mount [`app::App`] into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
