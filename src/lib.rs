//! # chat-widget
//!
//! Leptos + WASM floating chat bubble that can be dropped into any host page.
//! The widget renders a toggle button and a message window, relays user text
//! to a remote `/chat` endpoint and shows the reply.
//!
//! Browser-only code (mounting, HTTP, timers, DOM handles) is gated behind
//! the `csr` feature. Without it the crate still exposes the message-log
//! state machine, wire types and formatting helpers, which is what the unit
//! tests exercise.

pub mod components;
pub mod config;
pub mod mount;
pub mod net;
pub mod state;
pub mod util;
