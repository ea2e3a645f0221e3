//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single choke point through which every controller reaches the
//! server, `error` defines the failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod types;
