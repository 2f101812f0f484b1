use super::*;

fn texts(chat: RwSignal<ChatState>) -> Vec<String> {
    chat.with_untracked(|c| c.messages.iter().map(|m| m.text.clone()).collect())
}

// =============================================================
// Views
// =============================================================

#[test]
fn header_view_outlives_its_strings() {
    let view = {
        let strings = WidgetStrings::default();
        header_view(strings)
    };
    drop(view);
}

#[test]
fn message_class_carries_sender_modifier() {
    assert_eq!(message_class(Sender::User), "chat-widget__message chat-widget__message--user");
    assert_eq!(message_class(Sender::Bot), "chat-widget__message chat-widget__message--bot");
}

// =============================================================
// Welcome
// =============================================================

#[test]
fn post_welcome_adds_single_greeting_from_default_strings() {
    let chat = RwSignal::new(ChatState::default());
    let strings = WidgetStrings::default();

    assert!(post_welcome(chat, &strings));

    chat.with_untracked(|c| {
        assert_eq!(c.messages.len(), 1);
        assert_eq!(c.messages[0].sender, Sender::Bot);
        assert_eq!(c.messages[0].text, WidgetStrings::default().welcome);
        assert!(!c.messages[0].pending);
    });
}

#[test]
fn post_welcome_after_teardown_is_dropped() {
    let chat = RwSignal::new(ChatState::default());
    chat.dispose();
    assert!(!post_welcome(chat, &WidgetStrings::default()));
}

// =============================================================
// Send cycle
// =============================================================

#[test]
fn start_send_records_user_text_and_clears_input() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new("  hello ".to_owned());
    let strings = WidgetStrings::default();

    let pending = start_send(chat, input, &strings).expect("send should start");

    assert_eq!(pending.text, "hello");
    assert!(input.get_untracked().is_empty());
    chat.with_untracked(|c| {
        assert_eq!(c.messages[0].sender, Sender::User);
        assert_eq!(c.messages[0].text, "hello");
        let placeholder = c.placeholder().expect("placeholder present");
        assert_eq!(placeholder.text, strings.thinking);
        assert_eq!(placeholder.id, pending.placeholder_id);
    });
}

#[test]
fn start_send_blank_input_does_nothing() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new("   ".to_owned());

    assert!(start_send(chat, input, &WidgetStrings::default()).is_none());
    assert_eq!(input.get_untracked(), "   ");
    assert!(texts(chat).is_empty());
}

#[test]
fn start_send_keeps_input_while_cycle_open() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new("one".to_owned());
    let strings = WidgetStrings::default();
    start_send(chat, input, &strings).expect("send should start");

    input.set("two".to_owned());
    assert!(start_send(chat, input, &strings).is_none());
    assert_eq!(input.get_untracked(), "two");
    assert_eq!(texts(chat), ["one".to_owned(), strings.thinking.clone()]);
}

#[test]
fn welcome_then_hello_then_reply_leaves_no_placeholder() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let strings = WidgetStrings::default();
    post_welcome(chat, &strings);

    input.set("hello".to_owned());
    let pending = start_send(chat, input, &strings).expect("send should start");
    assert_eq!(texts(chat)[1], "hello");

    assert_eq!(
        finish_send(chat, &pending, Ok("hi there".to_owned()), &strings.fallback),
        Some(true)
    );
    assert_eq!(texts(chat), [strings.welcome.clone(), "hello".to_owned(), "hi there".to_owned()]);
    assert!(chat.with_untracked(|c| c.placeholder().is_none() && !c.is_sending()));
}

#[test]
fn finish_send_failure_shows_fallback() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new("hi".to_owned());
    let strings = WidgetStrings::default();
    let pending = start_send(chat, input, &strings).expect("send should start");

    let reply = Err(ChatError::Status { status: 500 });
    assert_eq!(finish_send(chat, &pending, reply, &strings.fallback), Some(true));
    assert_eq!(texts(chat), ["hi".to_owned(), strings.fallback.clone()]);
}

#[test]
fn finish_send_stale_id_is_ignored() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new("hi".to_owned());
    let strings = WidgetStrings::default();
    start_send(chat, input, &strings).expect("send should start");
    let before = chat.get_untracked();

    let stale = PendingSend {
        placeholder_id: "x".to_owned(),
        text: "hi".to_owned(),
    };
    assert_eq!(finish_send(chat, &stale, Ok("late".to_owned()), &strings.fallback), Some(false));
    assert_eq!(chat.get_untracked(), before);
}

#[test]
fn finish_send_after_teardown_drops_reply() {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new("hi".to_owned());
    let strings = WidgetStrings::default();
    let pending = start_send(chat, input, &strings).expect("send should start");

    chat.dispose();
    assert_eq!(finish_send(chat, &pending, Ok("late".to_owned()), &strings.fallback), None);
}
