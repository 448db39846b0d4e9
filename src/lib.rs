//! # activity-board
//!
//! Leptos + WASM client for the club activity signup service. Lists
//! activities with their participants, signs a student up by email, and
//! lets an organizer remove a participant.
//!
//! The `board` controller holds the request/refresh/feedback logic behind
//! small traits so it runs natively under test; `components` and `pages`
//! bind it to the DOM. Browser-only code (`gloo-net`, `web-sys`) is gated on
//! the `csr` feature.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
