//! Wire types for the `/chat` endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode of the exchange maps to one [`ChatError`] variant.
//! The UI shows the same fallback text for all of them, but the variant is
//! kept so logs can tell a dead network from a broken backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST {api_url}/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Successful reply body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Errors produced by a chat exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never completed (DNS, refused connection, CORS, ...).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// A response arrived with a status outside 200-299.
    #[error("chat response error: status {status}")]
    Status { status: u16 },

    /// The body was not JSON or lacked the `response` field.
    #[error("chat response parse failed: {0}")]
    Protocol(String),
}

impl ChatError {
    /// Short stable label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Protocol(_) => "protocol",
        }
    }
}
