//! Single choice among a fixed list of options

use ratatui::text::{Line, Span};

use super::selection::{radio_marker, selection_prefix, selection_style};
use super::{cycle_next, cycle_prev};
use crate::tui::theme::Theme;

/// Exactly one selected option out of a non-empty list
///
/// Invariant: `selected < options.len()`.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    options: Vec<String>,
    selected: usize,
}

impl RadioGroup {
    /// Create a group with the first option selected
    ///
    /// `options` must not be empty.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        debug_assert!(!options.is_empty(), "radio group needs at least one option");
        Self {
            options,
            selected: 0,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select by index, clamping into range
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.options.len().saturating_sub(1));
    }

    /// Select the option with the given label; returns false if absent
    pub fn select_option(&mut self, label: &str) -> bool {
        match self.options.iter().position(|o| o == label) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        self.selected = cycle_next(self.selected, self.options.len());
    }

    pub fn previous(&mut self) {
        self.selected = cycle_prev(self.selected, self.options.len());
    }

    /// The selected option, or `""` if the index is somehow out of range
    pub fn selected_option(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Render the options inline after a label
    pub fn render_line(&self, label: &str, focused: bool, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{}{}: ", selection_prefix(focused), label),
            theme.label_style(focused),
        )];
        for (index, option) in self.options.iter().enumerate() {
            let is_selected = index == self.selected;
            let color = if is_selected {
                theme.checked
            } else {
                theme.text_muted
            };
            spans.push(Span::styled(
                format!("{} {}  ", radio_marker(is_selected), option),
                selection_style(is_selected && focused, color),
            ));
        }
        Line::from(spans)
    }
}
