//! # policy-assistant
//!
//! Leptos + WASM client for the policy question-answering service.
//!
//! The crate binds to page markup it does not own (an input, three buttons,
//! and loading/result/error regions located by id), sends one `POST /ask`
//! per question, and renders the answer, confidence, citations, follow-up
//! suggestions, and disclaimer.
//!
//! Browser glue lives behind the `csr` feature. Without it the crate builds
//! natively so state transitions, wire types, and formatting are testable
//! with plain `cargo test`.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and attaches the client to the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::launch();
}
