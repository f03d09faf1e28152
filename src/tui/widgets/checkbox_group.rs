//! A list of independent checkboxes with its own focus cursor

use ratatui::text::{Line, Span};

use super::selection::{check_marker, selection_prefix, selection_style};
use super::{cycle_next, cycle_prev};
use crate::tui::theme::Theme;

/// Ordered list of labelled checkboxes
///
/// `focused_index` is independent of each item's checked state.
#[derive(Debug, Clone, Default)]
pub struct CheckboxGroup {
    items: Vec<(String, bool)>,
    focused_index: usize,
}

impl CheckboxGroup {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(label, checked)| (label.into(), checked))
                .collect(),
            focused_index: 0,
        }
    }

    /// Build a group from all `labels`, checking the ones present in `checked`
    pub fn from_labels(labels: &[&str], checked: &[String]) -> Self {
        Self::new(
            labels
                .iter()
                .map(|label| (*label, checked.iter().any(|c| c == label))),
        )
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn focused_label(&self) -> Option<&str> {
        self.items.get(self.focused_index).map(|(l, _)| l.as_str())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|(l, _)| l == label)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|(_, c)| *c)
    }

    pub fn next(&mut self) {
        self.focused_index = cycle_next(self.focused_index, self.items.len());
    }

    pub fn previous(&mut self) {
        self.focused_index = cycle_prev(self.focused_index, self.items.len());
    }

    /// Toggle only the focused item
    pub fn toggle(&mut self) {
        if let Some((_, checked)) = self.items.get_mut(self.focused_index) {
            *checked = !*checked;
        }
    }

    /// Append an item at the end
    pub fn push(&mut self, label: impl Into<String>, checked: bool) {
        self.items.push((label.into(), checked));
    }

    /// Remove the focused item, keeping the focus in range
    pub fn remove_focused(&mut self) -> Option<String> {
        if self.focused_index >= self.items.len() {
            return None;
        }
        let (label, _) = self.items.remove(self.focused_index);
        if self.focused_index >= self.items.len() {
            self.focused_index = self.items.len().saturating_sub(1);
        }
        Some(label)
    }

    /// Labels of checked items, in insertion order
    pub fn checked(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// Render the heading plus one row per item
    ///
    /// The per-item arrow is only drawn while the group itself holds focus.
    pub fn render_lines(&self, label: &str, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("{}{}:", selection_prefix(focused), label),
            theme.label_style(focused),
        ))];
        for (index, (item, checked)) in self.items.iter().enumerate() {
            let item_focused = focused && index == self.focused_index;
            let color = if *checked {
                theme.checked
            } else {
                theme.text_muted
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    selection_prefix(item_focused).to_string(),
                    theme.label_style(item_focused),
                ),
                Span::styled(
                    format!("{} ", check_marker(*checked)),
                    selection_style(item_focused, color),
                ),
                Span::styled(item.clone(), theme.label_style(item_focused)),
            ]));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_unchecked() -> CheckboxGroup {
        CheckboxGroup::new([("feat", false), ("fix", false), ("docs", false)])
    }

    #[test]
    fn test_toggle_only_focused_item() {
        let mut group = three_unchecked();
        group.next();
        assert_eq!(group.focused_index(), 1);
        group.toggle();
        assert!(!group.is_checked(0));
        assert!(group.is_checked(1));
        assert!(!group.is_checked(2));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut group = three_unchecked();
        group.previous();
        assert_eq!(group.focused_index(), 2);
        group.next();
        assert_eq!(group.focused_index(), 0);
    }

    #[test]
    fn test_checked_preserves_insertion_order() {
        let mut group = CheckboxGroup::new([("c", true), ("a", false), ("b", true)]);
        assert_eq!(group.checked(), vec!["c".to_string(), "b".to_string()]);
        group.push("z", true);
        assert_eq!(group.checked().last().map(String::as_str), Some("z"));
    }

    #[test]
    fn test_from_labels() {
        let group = CheckboxGroup::from_labels(&["feat", "fix", "docs"], &["docs".to_string()]);
        assert_eq!(group.checked(), vec!["docs".to_string()]);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_remove_focused_keeps_focus_in_range() {
        let mut group = three_unchecked();
        group.previous();
        assert_eq!(group.remove_focused().as_deref(), Some("docs"));
        assert_eq!(group.focused_index(), 1);
        group.remove_focused();
        group.remove_focused();
        assert!(group.is_empty());
        assert_eq!(group.focused_index(), 0);
        assert_eq!(group.remove_focused(), None);
    }

    #[test]
    fn test_toggle_on_empty_group_is_noop() {
        let mut group = CheckboxGroup::default();
        group.toggle();
        group.next();
        assert!(group.checked().is_empty());
    }
}
