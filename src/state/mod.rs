//! Widget state modules.
//!
//! DESIGN
//! ======
//! Presentation state (`widget`) is kept apart from the message log (`chat`)
//! so toggling the window never touches the send cycle and vice versa.

pub mod chat;
pub mod widget;
