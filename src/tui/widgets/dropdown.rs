//! Collapsible single-choice list

use ratatui::text::{Line, Span};

use super::radio_group::RadioGroup;
use super::selection::{selection_name_style, selection_prefix};
use crate::tui::theme::Theme;

/// A radio group that only reacts to navigation while open
#[derive(Debug, Clone)]
pub struct Dropdown {
    group: RadioGroup,
    open: bool,
}

impl Dropdown {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: RadioGroup::new(options),
            open: false,
        }
    }

    pub fn options(&self) -> &[String] {
        self.group.options()
    }

    pub fn selected(&self) -> usize {
        self.group.selected()
    }

    pub fn selected_option(&self) -> &str {
        self.group.selected_option()
    }

    pub fn select(&mut self, index: usize) {
        self.group.select(index);
    }

    pub fn select_option(&mut self, label: &str) -> bool {
        self.group.select_option(label)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move the selection forward; no-op while closed
    ///
    /// Returns whether the selection moved.
    pub fn next(&mut self) -> bool {
        if self.open {
            self.group.next();
        }
        self.open
    }

    /// Move the selection backward; no-op while closed
    pub fn previous(&mut self) -> bool {
        if self.open {
            self.group.previous();
        }
        self.open
    }

    pub fn render_lines(&self, label: &str, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
        let arrow = if self.open { "▴" } else { "▾" };
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{}{}: ", selection_prefix(focused), label),
                theme.label_style(focused),
            ),
            Span::styled(
                format!("{} {}", self.selected_option(), arrow),
                theme.text_style(),
            ),
        ])];
        if self.open {
            for (index, option) in self.options().iter().enumerate() {
                let is_selected = index == self.selected();
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{}{}", selection_prefix(is_selected), option),
                        selection_name_style(is_selected, theme),
                    ),
                ]));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_navigation_is_noop() {
        let mut dropdown = Dropdown::new(["cerebras", "openai", "anthropic"]);
        assert!(!dropdown.next());
        assert!(!dropdown.previous());
        assert_eq!(dropdown.selected(), 0);
    }

    #[test]
    fn test_open_navigation_wraps() {
        let mut dropdown = Dropdown::new(["cerebras", "openai", "anthropic"]);
        dropdown.toggle();
        assert!(dropdown.is_open());
        dropdown.previous();
        assert_eq!(dropdown.selected_option(), "anthropic");
        dropdown.next();
        assert_eq!(dropdown.selected_option(), "cerebras");
        dropdown.toggle();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_render_lists_options_only_when_open() {
        let theme = Theme::dark();
        let mut dropdown = Dropdown::new(["a", "b"]);
        assert_eq!(dropdown.render_lines("Pick", true, &theme).len(), 1);
        dropdown.toggle();
        assert_eq!(dropdown.render_lines("Pick", true, &theme).len(), 3);
    }
}
