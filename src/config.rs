//! Widget configuration and the fixed UI strings.
//!
//! DESIGN
//! ======
//! The API base address is fixed at construction time. The bootstrap may
//! override it from a `data-chat-api-url` attribute on the host page's
//! `<html>` element; everything else uses compiled-in defaults. Strings are
//! shipped in a single locale.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_WELCOME_DELAY_MS: u32 = 1000;

/// Attribute on the root `<html>` element that overrides [`DEFAULT_API_URL`].
pub const API_URL_ATTRIBUTE: &str = "data-chat-api-url";

/// User-facing text rendered by the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetStrings {
    pub title: String,
    pub subtitle: String,
    pub input_placeholder: String,
    pub welcome: String,
    pub thinking: String,
    pub fallback: String,
}

impl Default for WidgetStrings {
    fn default() -> Self {
        Self {
            title: "Помощник CompanyName".to_owned(),
            subtitle: "Готов ответить на ваши вопросы".to_owned(),
            input_placeholder: "Задайте вопрос о работе...".to_owned(),
            welcome: "Привет! Я помощник для наставников CompanyName. Могу ответить на вопросы о работе, \
                      расписании, выплатах и многом другом. Чем могу помочь?"
                .to_owned(),
            thinking: "Думаю... 🤔".to_owned(),
            fallback: "Извините, произошла ошибка соединения с сервером. Попробуйте позже или обратитесь \
                       к кураторам в бот."
                .to_owned(),
        }
    }
}

/// Construction-time settings for a [`ChatWidget`](crate::components::chat_widget::ChatWidget).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub api_url: String,
    pub welcome_delay_ms: u32,
    pub strings: WidgetStrings,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            welcome_delay_ms: DEFAULT_WELCOME_DELAY_MS,
            strings: WidgetStrings::default(),
        }
    }
}

impl WidgetConfig {
    /// Replace the API base address. Blank values keep the current one.
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        let trimmed = api_url.trim();
        if !trimmed.is_empty() {
            trimmed.clone_into(&mut self.api_url);
        }
        self
    }

    /// Build the config for the current page, honoring [`API_URL_ATTRIBUTE`].
    ///
    /// Outside the browser this is just [`WidgetConfig::default`].
    pub fn from_host_page() -> Self {
        let config = Self::default();
        #[cfg(feature = "csr")]
        {
            let attr = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .and_then(|el| el.get_attribute(API_URL_ATTRIBUTE));
            if let Some(api_url) = attr {
                return config.with_api_url(&api_url);
            }
        }
        config
    }
}
