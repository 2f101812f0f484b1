//! HTTP helper for the chat backend.
//!
//! Client-side (csr): a real `POST` via `gloo-net`.
//! Elsewhere: returns a transport error, since the call is only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status and body checks live in plain functions so the failure taxonomy
//! can be tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatResponse};
#[cfg(feature = "csr")]
use super::types::ChatRequest;

/// Build the `/chat` URL for a base address, ignoring trailing slashes.
pub fn chat_endpoint(api_url: &str) -> String {
    format!("{}/chat", api_url.trim_end_matches('/'))
}

/// Reject statuses outside the ok range (200-299).
///
/// # Errors
///
/// Returns [`ChatError::Status`] for any other status.
pub fn check_status(status: u16) -> Result<(), ChatError> {
    if (200..=299).contains(&status) {
        Ok(())
    } else {
        Err(ChatError::Status { status })
    }
}

/// Extract the reply text from a response body.
///
/// # Errors
///
/// Returns [`ChatError::Protocol`] if the body is not JSON or has no
/// string `response` field.
pub fn parse_chat_response(body: &str) -> Result<String, ChatError> {
    serde_json::from_str::<ChatResponse>(body)
        .map(|r| r.response)
        .map_err(|e| ChatError::Protocol(e.to_string()))
}

/// Send `text` to `{api_url}/chat` and return the bot's reply.
///
/// # Errors
///
/// Returns the [`ChatError`] variant matching the failure.
pub async fn post_chat(api_url: &str, text: &str) -> Result<String, ChatError> {
    #[cfg(feature = "csr")]
    {
        let body = ChatRequest { text: text.to_owned() };
        let resp = gloo_net::http::Request::post(&chat_endpoint(api_url))
            .json(&body)
            .map_err(|e| ChatError::Protocol(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        check_status(resp.status())?;
        let raw = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        parse_chat_response(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api_url, text);
        Err(ChatError::Transport("not available outside the browser".to_owned()))
    }
}
