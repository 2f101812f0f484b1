//! Open/closed state of the chat window.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

/// Display state owned by the widget. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub is_open: bool,
}

impl WidgetState {
    /// Flip the window and return the new `is_open` value.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// CSS `display` value for the message window.
    pub fn window_display(self) -> &'static str {
        if self.is_open { "flex" } else { "none" }
    }

    /// CSS `transform` applied to the toggle button.
    pub fn button_transform(self) -> &'static str {
        if self.is_open { "scale(1.1)" } else { "scale(1)" }
    }
}
