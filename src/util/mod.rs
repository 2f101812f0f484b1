//! Utility helpers shared by the widget component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns (the local clock, HTML rendering) live here
//! so the component stays focused on view wiring.

pub mod clock;
pub mod markdown;
