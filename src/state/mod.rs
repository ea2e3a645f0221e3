//! Controller state for the client's sub-views.
//!
//! ARCHITECTURE
//! ============
//! Each module owns the mutable state of one sub-view as a plain struct with
//! synchronous transition methods, so the orchestration rules test natively
//! while pages wire the structs to `RwSignal`s and the network layer. State
//! is only mutated from completion callbacks of its own view's operations;
//! no cross-controller mutation occurs.

pub mod bot;
pub mod bots;
pub mod chat;
pub mod config;
pub mod documents;
pub mod ingest;
pub mod session;
