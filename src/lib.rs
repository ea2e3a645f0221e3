//! # docubot-client
//!
//! Leptos + WASM frontend for the document-chatbot service. An authenticated
//! user manages bots against a remote REST API; each bot owns ingested
//! documents, a mutable model configuration, and a query/chat interface.
//!
//! The interesting layer is session and resource orchestration: an ephemeral
//! bearer session with client-computed expiry gates every call, three
//! independently-paced sub-views share one bot identity, configuration edits
//! are diffed against server truth to gate saves, the document list
//! reconciles deletes locally between paginated fetches, and the chat
//! transcript accumulates append-only while requests are in flight.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client runtime to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
