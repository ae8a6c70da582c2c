//! # client
//!
//! Leptos + WASM frontend for the API test case generator.
//!
//! The page documents a sample API, lets the user request generated test
//! cases from the remote generation service, and renders the returned text.
//! The same crate is compiled twice: with `ssr` for server rendering inside
//! the host binary, and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
