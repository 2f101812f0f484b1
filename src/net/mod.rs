//! Networking for the single chat request/response exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the wire schema and the
//! error taxonomy shared with the state layer.

pub mod api;
pub mod types;
