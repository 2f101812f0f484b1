//! Page bootstrap and teardown for the widget.
//!
//! The module start hook mounts the widget into `<body>` once the document
//! is ready. Only one widget may exist per page; its unmount handle is held
//! here so `destroy_chat_widget` can tear it down, which runs the widget's
//! cleanups (pending welcome timer, in-flight reply).
//!
//! Everything that touches the DOM is gated behind `csr`; the readiness and
//! config decisions are plain functions.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

#[cfg(feature = "csr")]
use std::any::Any;
#[cfg(feature = "csr")]
use std::cell::RefCell;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;

#[cfg(feature = "csr")]
thread_local! {
    static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

/// Whether mounting must wait for `DOMContentLoaded`, given
/// `document.readyState`.
pub fn should_defer_mount(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Page config, with an explicit `api_url` taking precedence.
pub fn mount_config(api_url: Option<&str>) -> WidgetConfig {
    let config = WidgetConfig::from_host_page();
    match api_url {
        Some(url) => config.with_api_url(url),
        None => config,
    }
}

/// Module entry point: install console hooks and mount on page readiness.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::warn!("chat widget: no document, not mounting");
        return;
    };

    if should_defer_mount(&document.ready_state()) {
        let on_ready = Closure::once(|| {
            mount(mount_config(None));
        });
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            leptos::logging::error!("chat widget: readiness listener failed: {e:?}");
            return;
        }
        on_ready.forget();
    } else {
        mount(mount_config(None));
    }
}

/// Mount a widget against `api_url` (or the page default).
///
/// Returns `false` if a widget is already mounted or there is no `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_chat_widget(api_url: Option<String>) -> bool {
    mount(mount_config(api_url.as_deref()))
}

/// Unmount the widget. Returns `false` if none was mounted.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn destroy_chat_widget() -> bool {
    let handle = MOUNTED.with(|m| m.borrow_mut().take());
    let existed = handle.is_some();
    drop(handle);
    if existed {
        leptos::logging::log!("chat widget destroyed");
    }
    existed
}

#[cfg(feature = "csr")]
fn mount(config: WidgetConfig) -> bool {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        leptos::logging::warn!("chat widget already mounted, ignoring second mount");
        return false;
    }
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        leptos::logging::error!("chat widget: document has no body");
        return false;
    };

    let api_url = config.api_url.clone();
    let handle = leptos::mount::mount_to(body, move || view! { <ChatWidget config=config/> });
    MOUNTED.with(|m| *m.borrow_mut() = Some(Box::new(handle)));
    leptos::logging::log!("chat widget mounted, api={api_url}");
    true
}
