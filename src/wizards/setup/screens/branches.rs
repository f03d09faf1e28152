//! Branches screen: pull strategy and protected branches

use ratatui::text::{Line, Text};

use crate::config::{Config, PullStrategy};
use crate::confirm::{ConfirmFlow, ConfirmOutcome};
use crate::git::validate_branch_name;
use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::views::confirm::confirm_lines;
use crate::tui::widgets::{Button, Checkbox, CheckboxGroup, RadioGroup, TextField};

use super::super::screen::{
    clear_error_for, heading, push_error, step_within_group, Effect, FieldError, FocusRing,
    Nav, Outcome, Screen,
};
use super::super::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PullStrategy,
    NewBranch,
    Protected,
    DeleteMerged,
    Continue,
}

/// Branch policy step
#[derive(Debug, Clone)]
pub struct BranchesScreen {
    pull_strategy: RadioGroup,
    new_branch: TextField,
    protected: CheckboxGroup,
    delete_merged: Checkbox,
    continue_button: Button,
    confirm: ConfirmFlow<String>,
    error: Option<FieldError<Field>>,
    focus: FocusRing,
    nav: Nav,
}

impl BranchesScreen {
    pub fn new(config: &Config) -> Self {
        let git = &config.git;
        let mut pull_strategy = RadioGroup::new(PullStrategy::ALL.iter().map(|s| s.label()));
        if let Some(index) = PullStrategy::ALL.iter().position(|s| *s == git.pull_strategy) {
            pull_strategy.select(index);
        }
        let mut screen = Self {
            pull_strategy,
            new_branch: TextField::new("release"),
            protected: CheckboxGroup::new(
                git.protected_branches.iter().map(|b| (b.clone(), true)),
            ),
            delete_merged: Checkbox::new(
                "Delete branches after merge",
                git.delete_merged_branches,
            ),
            continue_button: Button::new("Continue"),
            confirm: ConfirmFlow::new(),
            error: None,
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.sync_focus();
        screen
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::PullStrategy, Field::NewBranch];
        if !self.protected.is_empty() {
            fields.push(Field::Protected);
        }
        fields.push(Field::DeleteMerged);
        fields.push(Field::Continue);
        fields
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.current(&self.visible_fields())
    }

    pub fn protected_branches(&self) -> Vec<String> {
        self.protected.checked()
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm.is_pending()
    }

    pub fn error_field(&self) -> Option<Field> {
        self.error.as_ref().map(|e| e.field)
    }

    fn selected_strategy(&self) -> PullStrategy {
        PullStrategy::ALL
            .get(self.pull_strategy.selected())
            .copied()
            .unwrap_or_default()
    }

    /// Add the typed branch to the protected list
    fn add_branch(&mut self) {
        let name = self.new_branch.value().trim().to_string();
        if name.is_empty() {
            let len = self.visible_fields().len();
            self.focus.next(len);
            return;
        }
        if let Err(message) = validate_branch_name(&name) {
            self.error = Some(FieldError::new(Field::NewBranch, message));
            return;
        }
        if self.protected.contains(&name) {
            self.error = Some(FieldError::new(
                Field::NewBranch,
                format!("'{}' is already protected", name),
            ));
            return;
        }
        self.protected.push(name, true);
        self.new_branch.clear();
        self.error = None;
    }

    fn handle_confirm(&mut self, key: Key) {
        match self.confirm.handle_key(key) {
            ConfirmOutcome::Confirmed(name) => {
                let previous = self.focused_field();
                if self.protected.focused_label() == Some(name.as_str()) {
                    self.protected.remove_focused();
                    tracing::debug!("Removed protected branch {}", name);
                }
                let fields = self.visible_fields();
                self.focus.retarget(previous, &fields);
            }
            ConfirmOutcome::Dismissed | ConfirmOutcome::Pending | ConfirmOutcome::Ignored => {}
        }
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.new_branch.set_focused(focused == Some(Field::NewBranch));
        self.delete_merged
            .set_focused(focused == Some(Field::DeleteMerged));
        self.continue_button
            .set_focused(focused == Some(Field::Continue));
    }
}

impl Screen for BranchesScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Branches
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        if self.confirm.is_pending() {
            self.handle_confirm(key);
            self.sync_focus();
            return None;
        }

        let fields = self.visible_fields();
        let Some(field) = self.focus.current(&fields) else {
            return None;
        };

        match (field, key) {
            (_, Key::Esc) => self.nav.request(Outcome::Back),
            (Field::PullStrategy, Key::Right | Key::Space | Key::Enter) => {
                self.pull_strategy.next()
            }
            (Field::PullStrategy, Key::Left) => self.pull_strategy.previous(),
            (Field::NewBranch, Key::Enter) => self.add_branch(),
            (Field::Protected, Key::Space) => self.protected.toggle(),
            (Field::Protected, Key::Delete | Key::Backspace) => {
                if let Some(name) = self.protected.focused_label() {
                    self.confirm.request(name.to_string());
                }
            }
            (Field::Protected, Key::Up | Key::Down)
                if step_within_group(&mut self.protected, key) => {}
            (Field::DeleteMerged, Key::Space) => self.delete_merged.toggle(),
            (Field::Continue, Key::Enter) => self.nav.request(Outcome::Continue),
            (_, Key::Enter) => self.focus.next(fields.len()),
            (_, other) => {
                if !self.focus.handle_key(other, fields.len())
                    && field == Field::NewBranch
                    && self.new_branch.handle_key(other)
                {
                    clear_error_for(&mut self.error, Field::NewBranch);
                }
            }
        }
        self.sync_focus();
        None
    }

    fn commit(&self, config: &mut Config) {
        let git = &mut config.git;
        git.pull_strategy = self.selected_strategy();
        git.protected_branches = self.protected.checked();
        git.delete_merged_branches = self.delete_merged.is_checked();
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let focused = self.focused_field();
        let mut lines = heading(
            "Branches",
            "How gitwise pulls, and which branches it must never rewrite.",
            theme,
        );
        lines.push(self.pull_strategy.render_line(
            "Pull strategy",
            focused == Some(Field::PullStrategy),
            theme,
        ));
        lines.push(self.new_branch.render_line("Protect branch", theme));
        if !self.protected.is_empty() {
            lines.extend(self.protected.render_lines(
                "Protected branches",
                focused == Some(Field::Protected),
                theme,
            ));
        }
        lines.push(self.delete_merged.render_line(theme));
        lines.push(Line::from(""));
        lines.push(self.continue_button.render_line(theme));

        if let (Some(name), Some(choice)) = (self.confirm.pending(), self.confirm.choice()) {
            lines.push(Line::from(""));
            lines.extend(confirm_lines(
                &format!("Remove '{}' from protected branches?", name),
                choice,
                theme,
            ));
        }
        push_error(&mut lines, self.error(), theme);
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        if self.confirm.is_pending() {
            "←/→ choose · y/n · enter confirm · esc cancel"
        } else {
            "tab move · ↑↓ items · space toggle · del remove · enter add · esc back"
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    fn nav(&self) -> &Nav {
        &self.nav
    }

    fn nav_mut(&mut self) -> &mut Nav {
        &mut self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizards::setup::screen::plain_text;
    use crate::wizards::setup::screens::test_support::type_text;

    fn screen() -> BranchesScreen {
        BranchesScreen::new(&Config::default())
    }

    #[test]
    fn test_pull_strategy_cycles() {
        let mut screen = screen();
        screen.update(Key::Right);
        let mut config = Config::default();
        screen.commit(&mut config);
        assert_eq!(config.git.pull_strategy, PullStrategy::Rebase);

        screen.update(Key::Left);
        screen.update(Key::Left);
        screen.commit(&mut config);
        assert_eq!(config.git.pull_strategy, PullStrategy::FfOnly);
    }

    #[test]
    fn test_add_protected_branch() {
        let mut screen = screen();
        screen.update(Key::Tab);
        type_text(&mut screen, "develop");
        screen.update(Key::Enter);
        assert_eq!(screen.protected_branches(), vec!["main", "develop"]);
        assert_eq!(screen.focused_field(), Some(Field::NewBranch));
    }

    #[test]
    fn test_duplicate_and_invalid_branches_rejected() {
        let mut screen = screen();
        screen.update(Key::Tab);
        type_text(&mut screen, "main");
        screen.update(Key::Enter);
        assert_eq!(screen.error_field(), Some(Field::NewBranch));
        assert_eq!(screen.protected_branches(), vec!["main"]);

        for _ in 0..4 {
            screen.update(Key::Backspace);
        }
        assert!(screen.error().is_none());
        type_text(&mut screen, "bad name");
        screen.update(Key::Enter);
        assert!(screen.error().is_some_and(|e| e.contains("cannot contain ' '")));
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let mut screen = screen();
        screen.update(Key::Tab);
        screen.update(Key::Tab);
        assert_eq!(screen.focused_field(), Some(Field::Protected));

        screen.update(Key::Delete);
        assert!(screen.is_confirming());
        let rendered = plain_text(&screen.render(&Theme::default()));
        assert!(rendered.contains("Remove 'main' from protected branches?"));

        // Keys are captured while the confirmation is pending
        screen.update(Key::Esc);
        assert!(!screen.should_go_back());
        assert!(!screen.is_confirming());
        assert_eq!(screen.protected_branches(), vec!["main"]);

        screen.update(Key::Delete);
        screen.update(Key::Char('y'));
        screen.update(Key::Enter);
        assert!(screen.protected_branches().is_empty());
        assert!(!screen.visible_fields().contains(&Field::Protected));
        assert_eq!(screen.focused_field(), Some(Field::DeleteMerged));
    }

    #[test]
    fn test_unchecked_branches_not_committed() {
        let mut screen = screen();
        screen.update(Key::Tab);
        screen.update(Key::Tab);
        screen.update(Key::Space);
        let mut config = Config::default();
        screen.commit(&mut config);
        assert!(config.git.protected_branches.is_empty());
    }

    #[test]
    fn test_esc_goes_back() {
        let mut screen = screen();
        screen.update(Key::Esc);
        assert!(screen.should_go_back());
    }
}
