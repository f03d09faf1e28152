//! Boolean toggle

use ratatui::text::{Line, Span};

use super::selection::{check_marker, selection_prefix, selection_style};
use crate::tui::theme::Theme;

/// A single labelled checkbox
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    label: String,
    checked: bool,
    focused: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            focused: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the checked state
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn render_line(&self, theme: &Theme) -> Line<'static> {
        let marker_color = if self.checked {
            theme.checked
        } else {
            theme.text_muted
        };
        Line::from(vec![
            Span::styled(
                selection_prefix(self.focused).to_string(),
                theme.label_style(self.focused),
            ),
            Span::styled(
                format!("{} ", check_marker(self.checked)),
                selection_style(self.focused, marker_color),
            ),
            Span::styled(self.label.clone(), theme.label_style(self.focused)),
        ])
    }
}
