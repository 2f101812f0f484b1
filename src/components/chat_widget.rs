//! Floating chat bubble: toggle button plus a message window.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns its state signals and element handles (`NodeRef`s
//! created with the view), so nothing is looked up by id. One widget per page
//! is assumed; `crate::mount` enforces that.
//!
//! Sends go through `ChatState::begin_send`/`resolve`, which serialize
//! requests and tie each reply to its own placeholder.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::config::{WidgetConfig, WidgetStrings};
use crate::net::types::ChatError;
use crate::state::chat::{ChatMessage, ChatState, PendingSend, Sender};
use crate::state::widget::WidgetState;
use crate::util::clock::now_hhmm;
use crate::util::markdown::render_reply_html;

const WIDGET_CSS: &str = include_str!("../../style/chat_widget.css");

/// The chat widget root.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let WidgetConfig {
        api_url,
        welcome_delay_ms,
        strings,
    } = config;
    let header = header_view(strings.clone());
    let placeholder = strings.input_placeholder.clone();
    let strings = StoredValue::new(strings);
    let api_url = StoredValue::new(api_url);

    let widget = RwSignal::new(WidgetState::default());
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    schedule_welcome(chat, strings, welcome_delay_ms);

    // Keep the newest entry in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            } else {
                leptos::logging::error!("chat log container not mounted");
            }
        }
    });

    Effect::new(move || {
        let is_open = widget.with(|w| w.is_open);

        #[cfg(feature = "csr")]
        {
            if is_open {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = is_open;
        }
    });

    let toggle_chat = move |_| {
        widget.update(|w| {
            w.toggle();
        });
    };

    let do_send = move || {
        let Some(pending) = strings.with_value(|s| start_send(chat, input, s)) else {
            return;
        };
        let fallback = strings.with_value(|s| s.fallback.clone());

        #[cfg(feature = "csr")]
        {
            let api_url = api_url.get_value();
            leptos::task::spawn_local(async move {
                let reply = crate::net::api::post_chat(&api_url, &pending.text).await;
                finish_send(chat, &pending, reply, &fallback);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = api_url;
            let reply = Err(ChatError::Transport("not available outside the browser".to_owned()));
            finish_send(chat, &pending, reply, &fallback);
        }
    };

    view! {
        <div class="chat-widget">
            <style>{WIDGET_CSS}</style>

            <div
                class="chat-widget__button"
                style:transform=move || widget.get().button_transform()
                on:click=toggle_chat
            >
                "💬"
            </div>

            <div class="chat-widget__window" style:display=move || widget.get().window_display()>
                {header}

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || chat.with(|c| c.messages.iter().map(message_view).collect::<Vec<_>>())}
                </div>

                {input_row_view(placeholder, input, input_ref, chat, do_send)}
            </div>
        </div>
    }
}

fn header_view(strings: WidgetStrings) -> impl IntoView {
    let WidgetStrings { title, subtitle, .. } = strings;
    view! {
        <div class="chat-widget__header">
            <div class="chat-widget__avatar">"🤖"</div>
            <div>
                <div>{title}</div>
                <div class="chat-widget__subtitle">{subtitle}</div>
            </div>
        </div>
    }
}

fn input_row_view(
    placeholder: String,
    input: RwSignal<String>,
    input_ref: NodeRef<leptos::html::Input>,
    chat: RwSignal<ChatState>,
    do_send: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.with(ChatState::is_sending);

    view! {
        <div class="chat-widget__input-row">
            <input
                class="chat-widget__input"
                type="text"
                placeholder=placeholder
                node_ref=input_ref
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="chat-widget__send" on:click=on_click disabled=move || !can_send()>
                "➤"
            </button>
        </div>
    }
}

fn message_class(sender: Sender) -> String {
    format!("chat-widget__message chat-widget__message--{}", sender.as_str())
}

fn message_view(msg: &ChatMessage) -> AnyView {
    let class = message_class(msg.sender);
    let pending = msg.pending;
    let timestamp = msg.timestamp.clone();

    let body = if msg.sender == Sender::Bot && !pending {
        let rendered = render_reply_html(&msg.text);
        view! { <div class="chat-widget__text chat-widget__markdown" inner_html=rendered></div> }.into_any()
    } else {
        let text = msg.text.clone();
        view! { <div class="chat-widget__text">{text}</div> }.into_any()
    };

    view! {
        <div class=class class:chat-widget__message--pending=pending>
            {body}
            <div class="chat-widget__time">{timestamp}</div>
        </div>
    }
    .into_any()
}

/// Post the welcome message once after `delay_ms`, unless torn down first.
fn schedule_welcome(chat: RwSignal<ChatState>, strings: StoredValue<WidgetStrings>, delay_ms: u32) {
    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            let _ = strings.try_with_value(|s| post_welcome(chat, s));
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (chat, strings, delay_ms);
    }
}

/// Append the greeting as a bot message. Returns `false` once torn down.
pub(crate) fn post_welcome(chat: RwSignal<ChatState>, strings: &WidgetStrings) -> bool {
    chat.try_update(|c| {
        c.add_message(strings.welcome.clone(), Sender::Bot, &now_hhmm());
    })
    .is_some()
}

/// Open a send cycle from the current input and clear it.
///
/// Leaves the input untouched when nothing was started (blank text or a
/// cycle already open).
pub(crate) fn start_send(
    chat: RwSignal<ChatState>,
    input: RwSignal<String>,
    strings: &WidgetStrings,
) -> Option<PendingSend> {
    let raw = input.get_untracked();
    let pending = chat
        .try_update(|c| c.begin_send(&raw, &strings.thinking, &now_hhmm()))
        .flatten()?;
    input.set(String::new());
    Some(pending)
}

/// Close a send cycle with the backend outcome.
///
/// Returns the resolution result, or `None` if the widget was torn down.
pub(crate) fn finish_send(
    chat: RwSignal<ChatState>,
    pending: &PendingSend,
    reply: Result<String, ChatError>,
    fallback: &str,
) -> Option<bool> {
    if let Err(e) = &reply {
        leptos::logging::error!("chat send failed: kind={} {e}", e.kind());
    }
    let resolved = chat.try_update(|c| c.resolve(&pending.placeholder_id, reply, fallback, &now_hhmm()));
    match resolved {
        Some(true) => {}
        Some(false) => leptos::logging::warn!("stale chat reply ignored: {}", pending.placeholder_id),
        None => leptos::logging::log!("chat widget torn down, reply dropped"),
    }
    resolved
}
