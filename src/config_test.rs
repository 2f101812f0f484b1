use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_points_at_local_backend() {
    let config = WidgetConfig::default();
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.welcome_delay_ms, 1000);
}

#[test]
fn default_strings_are_non_empty() {
    let strings = WidgetStrings::default();
    for text in [
        &strings.title,
        &strings.subtitle,
        &strings.input_placeholder,
        &strings.welcome,
        &strings.thinking,
        &strings.fallback,
    ] {
        assert!(!text.trim().is_empty());
    }
}

#[test]
fn fallback_differs_from_thinking() {
    let strings = WidgetStrings::default();
    assert_ne!(strings.fallback, strings.thinking);
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn with_api_url_replaces_base_and_trims() {
    let config = WidgetConfig::default().with_api_url("  https://bot.example.com/api ");
    assert_eq!(config.api_url, "https://bot.example.com/api");
}

#[test]
fn with_api_url_ignores_blank_value() {
    let config = WidgetConfig::default().with_api_url("   ");
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_host_page_is_default_outside_browser() {
    assert_eq!(WidgetConfig::from_host_page(), WidgetConfig::default());
}
