//! # judge-client
//!
//! Leptos + WASM frontend core for the competitive-programming platform.
//!
//! This crate owns the browser session (who is signed in, with which
//! permissions), its `localStorage` persistence, the navigation guard that
//! gates protected routes, and the typed REST helpers that produce sessions.
//! Pages are thin route shells over that core.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
