use super::*;

#[test]
fn chat_request_serializes_text_field() {
    let req = ChatRequest { text: "hello".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "hello" }));
}

#[test]
fn chat_response_ignores_extra_fields() {
    let resp: ChatResponse = serde_json::from_str(r#"{"response":"hi","source":"kb"}"#).unwrap();
    assert_eq!(resp.response, "hi");
}

#[test]
fn chat_response_requires_response_field() {
    assert!(serde_json::from_str::<ChatResponse>(r#"{"answer":"hi"}"#).is_err());
}

#[test]
fn chat_error_kinds_are_distinct() {
    let kinds = [
        ChatError::Transport("offline".to_owned()).kind(),
        ChatError::Status { status: 500 }.kind(),
        ChatError::Protocol("eof".to_owned()).kind(),
    ];
    assert_eq!(kinds, ["transport", "status", "protocol"]);
}

#[test]
fn chat_error_display_includes_status() {
    let err = ChatError::Status { status: 503 };
    assert_eq!(err.to_string(), "chat response error: status 503");
}
