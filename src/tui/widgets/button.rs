//! Activatable button

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::selection::selection_prefix;
use crate::tui::theme::Theme;

/// A labelled button
///
/// Activation is interpreted by the owning screen; the button only carries state.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    active: bool,
    focused: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: true,
            focused: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Render as `[ Label ]`
    pub fn span(&self, theme: &Theme) -> Span<'static> {
        let style = if !self.active {
            theme.muted_style()
        } else if self.focused {
            theme
                .label_style(true)
                .add_modifier(Modifier::REVERSED)
        } else {
            theme.text_style()
        };
        Span::styled(format!("[ {} ]", self.label), style)
    }

    pub fn render_line(&self, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                selection_prefix(self.focused).to_string(),
                theme.label_style(self.focused),
            ),
            self.span(theme),
        ])
    }
}
