//! Single-line text input

use ratatui::text::{Line, Span};

use super::selection::selection_prefix;
use crate::input::Key;
use crate::tui::theme::Theme;

const PASSWORD_MASK: char = '•';

/// Single-line text field
///
/// Editing only ever happens at the end of the value; there is no inner cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    placeholder: String,
    is_password: bool,
    focused: bool,
}

impl TextField {
    /// Create an empty field with the given placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Seed the field with an initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mask the value when rendering
    pub fn password(mut self) -> Self {
        self.is_password = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn is_password(&self) -> bool {
        self.is_password
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Append a printable character (space included); control characters are ignored
    ///
    /// Returns whether the value changed.
    pub fn append(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        true
    }

    /// Remove the last character; no-op on an empty value
    ///
    /// Returns whether the value changed.
    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply an editing key
    ///
    /// Handles typed characters, `space`, `backspace` and `delete` (which behaves like
    /// backspace since there is no inner cursor). Returns whether the value changed;
    /// any other key is left for the owning screen.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Backspace | Key::Delete => self.backspace(),
            other => other.typed_char().map(|c| self.append(c)).unwrap_or(false),
        }
    }

    /// Value as it should be displayed (masked for password fields)
    pub fn display_value(&self) -> String {
        if self.is_password {
            std::iter::repeat(PASSWORD_MASK)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }

    /// Render as a labelled form row
    pub fn render_line(&self, label: &str, theme: &Theme) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                format!("{}{}: ", selection_prefix(self.focused), label),
                theme.label_style(self.focused),
            ),
        ];
        if self.value.is_empty() {
            spans.push(Span::styled(
                self.placeholder.clone(),
                ratatui::style::Style::default().fg(theme.placeholder),
            ));
        } else {
            spans.push(Span::styled(self.display_value(), theme.text_style()));
        }
        if self.focused {
            spans.push(Span::styled("▏", theme.label_style(true)));
        }
        Line::from(spans)
    }
}
