//! Confirmation sub-flow for destructive actions
//!
//! [`ConfirmFlow`] is a two-state machine (browsing / confirm pending) that any screen
//! can embed. [`ActionView`] pairs it with a browsable list of actions, some of which
//! execute immediately, some only after an explicit "Yes", and some not at all.

use crate::input::Key;
use crate::tui::widgets::{cycle_next, cycle_prev};

/// Binary selector shown while a confirmation is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    Yes,
    /// The non-destructive choice, selected by default
    #[default]
    No,
}

impl ConfirmChoice {
    pub fn toggled(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

/// State of the confirmation sub-flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmState<A> {
    Browsing,
    Pending { action: A, choice: ConfirmChoice },
}

impl<A> Default for ConfirmState<A> {
    fn default() -> Self {
        ConfirmState::Browsing
    }
}

/// Result of feeding a key to a [`ConfirmFlow`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome<A> {
    /// No confirmation pending; the key was not consumed
    Ignored,
    /// Key consumed while pending (selector moved or key swallowed)
    Pending,
    /// User chose "Yes"; execute this action
    Confirmed(A),
    /// User chose "No" or cancelled; the action was discarded
    Dismissed,
}

/// Browsing / confirm-pending state machine
#[derive(Debug, Clone)]
pub struct ConfirmFlow<A> {
    state: ConfirmState<A>,
}

impl<A> Default for ConfirmFlow<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ConfirmFlow<A> {
    pub fn new() -> Self {
        Self {
            state: ConfirmState::Browsing,
        }
    }

    pub fn state(&self) -> &ConfirmState<A> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ConfirmState::Pending { .. })
    }

    pub fn pending(&self) -> Option<&A> {
        match &self.state {
            ConfirmState::Pending { action, .. } => Some(action),
            ConfirmState::Browsing => None,
        }
    }

    pub fn choice(&self) -> Option<ConfirmChoice> {
        match &self.state {
            ConfirmState::Pending { choice, .. } => Some(*choice),
            ConfirmState::Browsing => None,
        }
    }

    /// Ask for confirmation of `action`; the selector starts on "No"
    pub fn request(&mut self, action: A) {
        self.state = ConfirmState::Pending {
            action,
            choice: ConfirmChoice::No,
        };
    }

    /// Drop any pending action without executing it
    pub fn cancel(&mut self) {
        self.state = ConfirmState::Browsing;
    }

    pub fn handle_key(&mut self, key: Key) -> ConfirmOutcome<A> {
        let ConfirmState::Pending { choice, .. } = &mut self.state else {
            return ConfirmOutcome::Ignored;
        };

        match key {
            Key::Left | Key::Right | Key::Tab | Key::BackTab => {
                *choice = choice.toggled();
                ConfirmOutcome::Pending
            }
            Key::Char('y') | Key::Char('Y') => {
                *choice = ConfirmChoice::Yes;
                ConfirmOutcome::Pending
            }
            Key::Char('n') | Key::Char('N') => {
                *choice = ConfirmChoice::No;
                ConfirmOutcome::Pending
            }
            Key::Enter => match std::mem::take(&mut self.state) {
                ConfirmState::Pending {
                    action,
                    choice: ConfirmChoice::Yes,
                } => ConfirmOutcome::Confirmed(action),
                _ => ConfirmOutcome::Dismissed,
            },
            Key::Esc => {
                self.state = ConfirmState::Browsing;
                ConfirmOutcome::Dismissed
            }
            _ => ConfirmOutcome::Pending,
        }
    }
}

/// What activating an [`ActionItem`] does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind<A> {
    /// Informational row; cannot be activated
    ViewOnly,
    /// Executes as soon as it is activated
    Immediate(A),
    /// Executes only after an explicit "Yes"
    Confirm(A),
}

/// A row in an [`ActionView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem<A> {
    pub label: String,
    pub kind: ActionKind<A>,
}

impl<A> ActionItem<A> {
    pub fn view_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::ViewOnly,
        }
    }

    pub fn immediate(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Immediate(action),
        }
    }

    pub fn confirm(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Confirm(action),
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(self.kind, ActionKind::Confirm(_))
    }

    pub fn is_activatable(&self) -> bool {
        !matches!(self.kind, ActionKind::ViewOnly)
    }
}

/// A browsable action list gated by a [`ConfirmFlow`]
#[derive(Debug, Clone)]
pub struct ActionView<A> {
    items: Vec<ActionItem<A>>,
    selected: usize,
    confirm: ConfirmFlow<A>,
}

impl<A: Clone> ActionView<A> {
    pub fn new(items: Vec<ActionItem<A>>) -> Self {
        Self {
            items,
            selected: 0,
            confirm: ConfirmFlow::new(),
        }
    }

    pub fn items(&self) -> &[ActionItem<A>] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn confirm(&self) -> &ConfirmFlow<A> {
        &self.confirm
    }

    pub fn selected_item(&self) -> Option<&ActionItem<A>> {
        self.items.get(self.selected)
    }

    /// Feed a key; returns the action to execute, if any
    ///
    /// Each action is returned at most once per activation.
    pub fn handle_key(&mut self, key: Key) -> Option<A> {
        if self.confirm.is_pending() {
            return match self.confirm.handle_key(key) {
                ConfirmOutcome::Confirmed(action) => Some(action),
                _ => None,
            };
        }

        match key {
            Key::Down | Key::Tab => {
                self.selected = cycle_next(self.selected, self.items.len());
                None
            }
            Key::Up | Key::BackTab => {
                self.selected = cycle_prev(self.selected, self.items.len());
                None
            }
            Key::Enter => {
                let item = self.items.get(self.selected)?;
                match &item.kind {
                    ActionKind::ViewOnly => None,
                    ActionKind::Immediate(action) => Some(action.clone()),
                    ActionKind::Confirm(action) => {
                        self.confirm.request(action.clone());
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestAction {
        Refresh,
        Delete,
    }

    fn view() -> ActionView<TestAction> {
        ActionView::new(vec![
            ActionItem::view_only("Details"),
            ActionItem::immediate("Refresh", TestAction::Refresh),
            ActionItem::confirm("Delete", TestAction::Delete),
        ])
    }

    #[test]
    fn test_request_defaults_to_no() {
        let mut flow = ConfirmFlow::new();
        flow.request(TestAction::Delete);
        assert!(flow.is_pending());
        assert_eq!(flow.choice(), Some(ConfirmChoice::No));
        assert_eq!(flow.pending(), Some(&TestAction::Delete));
    }

    #[test]
    fn test_enter_on_no_discards() {
        let mut flow = ConfirmFlow::new();
        flow.request(TestAction::Delete);
        assert_eq!(flow.handle_key(Key::Enter), ConfirmOutcome::Dismissed);
        assert!(!flow.is_pending());
        assert_eq!(flow.handle_key(Key::Enter), ConfirmOutcome::Ignored);
    }

    #[test]
    fn test_enter_on_yes_confirms_once() {
        let mut flow = ConfirmFlow::new();
        flow.request(TestAction::Delete);
        assert_eq!(flow.handle_key(Key::Right), ConfirmOutcome::Pending);
        assert_eq!(flow.choice(), Some(ConfirmChoice::Yes));
        assert_eq!(
            flow.handle_key(Key::Enter),
            ConfirmOutcome::Confirmed(TestAction::Delete)
        );
        assert_eq!(flow.handle_key(Key::Enter), ConfirmOutcome::Ignored);
    }

    #[test]
    fn test_esc_cancels_even_on_yes() {
        let mut flow = ConfirmFlow::new();
        flow.request(TestAction::Delete);
        flow.handle_key(Key::Char('y'));
        assert_eq!(flow.handle_key(Key::Esc), ConfirmOutcome::Dismissed);
        assert_eq!(*flow.state(), ConfirmState::Browsing);
    }

    #[test]
    fn test_selector_toggles_with_left_right_tab() {
        let mut flow = ConfirmFlow::new();
        flow.request(TestAction::Delete);
        flow.handle_key(Key::Left);
        assert_eq!(flow.choice(), Some(ConfirmChoice::Yes));
        flow.handle_key(Key::Tab);
        assert_eq!(flow.choice(), Some(ConfirmChoice::No));
        flow.handle_key(Key::BackTab);
        assert_eq!(flow.choice(), Some(ConfirmChoice::Yes));
    }

    #[test]
    fn test_view_only_item_cannot_be_activated() {
        let mut view = view();
        assert_eq!(view.handle_key(Key::Enter), None);
        assert!(!view.confirm().is_pending());
    }

    #[test]
    fn test_immediate_item_skips_confirmation() {
        let mut view = view();
        view.handle_key(Key::Down);
        assert_eq!(view.handle_key(Key::Enter), Some(TestAction::Refresh));
        assert!(!view.confirm().is_pending());
    }

    #[test]
    fn test_confirm_item_round_trip() {
        let mut view = view();
        view.handle_key(Key::Up);
        assert_eq!(view.selected(), 2);

        // Enter on "No" executes nothing
        assert_eq!(view.handle_key(Key::Enter), None);
        assert!(view.confirm().is_pending());
        assert_eq!(view.handle_key(Key::Enter), None);
        assert!(!view.confirm().is_pending());

        // Enter on "Yes" executes exactly once
        view.handle_key(Key::Enter);
        view.handle_key(Key::Right);
        assert_eq!(view.handle_key(Key::Enter), Some(TestAction::Delete));
        assert_eq!(view.handle_key(Key::Down), None);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn test_pending_confirmation_swallows_navigation() {
        let mut view = view();
        view.handle_key(Key::Up);
        view.handle_key(Key::Enter);
        view.handle_key(Key::Down);
        assert_eq!(view.selected(), 2);
    }
}
