//! Repository screen: pick a path, initialize it if needed, choose the default branch

use std::path::PathBuf;

use ratatui::text::{Line, Span, Text};

use crate::config::Config;
use crate::git::{validate_branch_name, GitBackend};
use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::widgets::{Button, TextField};

use super::super::screen::{
    clear_error_for, expand_path, heading, push_error, Effect, EffectResult, FieldError,
    FocusRing, Nav, Outcome, Screen,
};
use super::super::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Path,
    Initialize,
    DefaultBranch,
    Continue,
}

/// Git repository step
#[derive(Debug, Clone)]
pub struct GitInitScreen {
    path: TextField,
    initialize: Button,
    default_branch: TextField,
    continue_button: Button,
    is_repo: bool,
    status: Option<String>,
    error: Option<FieldError<Field>>,
    focus: FocusRing,
    nav: Nav,
}

impl GitInitScreen {
    pub fn new(config: &Config, git: &dyn GitBackend) -> Self {
        let path = TextField::new(".").with_value(config.git.repo_path.clone());
        let is_repo = git.is_git_repo(&expand_path(path.value()));
        let mut screen = Self {
            path,
            initialize: Button::new("Initialize repository"),
            default_branch: TextField::new("main").with_value(config.git.default_branch.clone()),
            continue_button: Button::new("Continue"),
            is_repo,
            status: None,
            error: None,
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.sync_focus();
        screen
    }

    /// Fields currently shown, in focus order
    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Path];
        if !self.is_repo {
            fields.push(Field::Initialize);
        }
        fields.push(Field::DefaultBranch);
        fields.push(Field::Continue);
        fields
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.current(&self.visible_fields())
    }

    pub fn is_repo(&self) -> bool {
        self.is_repo
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn error_field(&self) -> Option<Field> {
        self.error.as_ref().map(|e| e.field)
    }

    fn repo_path(&self) -> PathBuf {
        expand_path(self.path.value())
    }

    fn branch_name(&self) -> &str {
        self.default_branch.value().trim()
    }

    fn validate(&self) -> Result<(), FieldError<Field>> {
        if self.path.value().trim().is_empty() {
            return Err(FieldError::new(Field::Path, "Repository path is required"));
        }
        validate_branch_name(self.branch_name())
            .map_err(|message| FieldError::new(Field::DefaultBranch, message))
    }

    fn activate(&mut self, field: Field) -> Option<Effect> {
        let fields = self.visible_fields();
        match field {
            Field::Path => {
                self.focus.next(fields.len());
                Some(Effect::InspectRepository(self.repo_path()))
            }
            Field::Initialize => {
                let default_branch = match self.branch_name() {
                    "" => "main".to_string(),
                    name => name.to_string(),
                };
                Some(Effect::InitRepository {
                    path: self.repo_path(),
                    default_branch,
                })
            }
            Field::DefaultBranch => {
                self.focus.next(fields.len());
                None
            }
            Field::Continue => {
                match self.validate() {
                    Ok(()) => {
                        self.error = None;
                        self.nav.request(Outcome::Continue);
                    }
                    Err(error) => self.error = Some(error),
                }
                None
            }
        }
    }

    fn edit(&mut self, field: Field, key: Key) {
        let changed = match field {
            Field::Path => self.path.handle_key(key),
            Field::DefaultBranch => self.default_branch.handle_key(key),
            _ => false,
        };
        if changed {
            clear_error_for(&mut self.error, field);
            if field == Field::Path {
                self.status = None;
            }
        }
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.path.set_focused(focused == Some(Field::Path));
        self.initialize.set_focused(focused == Some(Field::Initialize));
        self.default_branch
            .set_focused(focused == Some(Field::DefaultBranch));
        self.continue_button
            .set_focused(focused == Some(Field::Continue));
    }
}

impl Screen for GitInitScreen {
    fn step(&self) -> WizardStep {
        WizardStep::GitInit
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        let fields = self.visible_fields();
        let Some(field) = self.focus.current(&fields) else {
            return None;
        };

        let effect = match key {
            Key::Esc => {
                self.nav.request(Outcome::Back);
                None
            }
            Key::Left if self.focus.index() == 0 => {
                self.nav.request(Outcome::Back);
                None
            }
            Key::Enter => self.activate(field),
            other => {
                if !self.focus.handle_key(other, fields.len()) {
                    self.edit(field, other);
                }
                None
            }
        };
        self.sync_focus();
        effect
    }

    fn resolve(&mut self, result: EffectResult) {
        let previous = self.focused_field();
        match result {
            EffectResult::Repository { is_repo } => {
                self.is_repo = is_repo;
                self.status = Some(if is_repo {
                    "Git repository detected".to_string()
                } else {
                    "Not a git repository yet".to_string()
                });
                let fields = self.visible_fields();
                self.focus.retarget(previous, &fields);
            }
            EffectResult::Initialized(Ok(())) => {
                self.is_repo = true;
                clear_error_for(&mut self.error, Field::Initialize);
                self.status = Some(format!(
                    "Initialized git repository in {}",
                    self.path.value().trim()
                ));
                let fields = self.visible_fields();
                self.focus.focus(&fields, Field::DefaultBranch);
            }
            EffectResult::Initialized(Err(message)) => {
                self.error = Some(FieldError::new(
                    Field::Initialize,
                    format!("git init failed: {}", message),
                ));
            }
        }
        self.sync_focus();
    }

    fn commit(&self, config: &mut Config) {
        config.git.repo_path = self.path.value().trim().to_string();
        config.git.default_branch = self.branch_name().to_string();
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let mut lines = heading(
            "Git repository",
            "Choose the repository gitwise should manage.",
            theme,
        );
        let detected = if self.is_repo {
            Span::styled("✓ git repository", theme.success_style())
        } else {
            Span::styled("✗ not a git repository", theme.error_style())
        };
        lines.push(Line::from(vec![
            Span::styled("Status: ", theme.muted_style()),
            detected,
        ]));
        lines.push(Line::from(""));
        lines.push(self.path.render_line("Path", theme));
        if !self.is_repo {
            lines.push(self.initialize.render_line(theme));
        }
        lines.push(self.default_branch.render_line("Default branch", theme));
        lines.push(Line::from(""));
        lines.push(self.continue_button.render_line(theme));
        if let Some(status) = &self.status {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                status.clone(),
                theme.muted_style(),
            )));
        }
        push_error(&mut lines, self.error(), theme);
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        "tab/↑↓ move · enter select · esc back · ctrl+c quit"
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
    use crate::wizards::setup::screens::test_support::{type_text, FakeGit};

    fn screen_with(is_repo: bool) -> GitInitScreen {
        GitInitScreen::new(&Config::default(), &FakeGit::new(is_repo))
    }

    #[test]
    fn test_initialize_hidden_for_existing_repo() {
        let screen = screen_with(true);
        assert_eq!(
            screen.visible_fields(),
            vec![Field::Path, Field::DefaultBranch, Field::Continue]
        );
        let screen = screen_with(false);
        assert!(screen.visible_fields().contains(&Field::Initialize));
    }

    #[test]
    fn test_continue_with_defaults() {
        let mut screen = screen_with(true);
        screen.update(Key::BackTab);
        assert_eq!(screen.focused_field(), Some(Field::Continue));
        screen.update(Key::Enter);
        assert!(screen.should_continue());
        assert!(screen.error().is_none());
    }

    #[test]
    fn test_invalid_branch_blocks_continue_and_clears_on_edit() {
        let mut screen = screen_with(true);
        screen.update(Key::Tab);
        type_text(&mut screen, "..");
        screen.update(Key::Tab);
        screen.update(Key::Enter);
        assert!(!screen.should_continue());
        assert_eq!(screen.error_field(), Some(Field::DefaultBranch));

        screen.update(Key::BackTab);
        screen.update(Key::Backspace);
        assert!(screen.error().is_none());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut screen = screen_with(true);
        screen.update(Key::Backspace);
        screen.update(Key::BackTab);
        screen.update(Key::Enter);
        assert_eq!(screen.error_field(), Some(Field::Path));
        assert!(!screen.should_continue());
    }

    #[test]
    fn test_enter_on_path_requests_inspection() {
        let mut screen = screen_with(true);
        let effect = screen.update(Key::Enter);
        assert!(matches!(effect, Some(Effect::InspectRepository(_))));
        assert_eq!(screen.focused_field(), Some(Field::DefaultBranch));
    }

    #[test]
    fn test_initialize_flow() {
        let mut screen = screen_with(false);
        screen.update(Key::Tab);
        assert_eq!(screen.focused_field(), Some(Field::Initialize));
        let effect = screen.update(Key::Enter);
        assert_eq!(
            effect,
            Some(Effect::InitRepository {
                path: PathBuf::from("."),
                default_branch: "main".to_string(),
            })
        );

        screen.resolve(EffectResult::Initialized(Ok(())));
        assert!(screen.is_repo());
        assert!(!screen.visible_fields().contains(&Field::Initialize));
        assert_eq!(screen.focused_field(), Some(Field::DefaultBranch));
        assert!(screen.status().is_some_and(|s| s.contains("Initialized")));
    }

    #[test]
    fn test_initialize_failure_is_shown() {
        let mut screen = screen_with(false);
        screen.update(Key::Tab);
        screen.update(Key::Enter);
        screen.resolve(EffectResult::Initialized(Err("permission denied".into())));
        assert!(!screen.is_repo());
        assert_eq!(screen.error_field(), Some(Field::Initialize));
        assert!(screen.error().is_some_and(|e| e.contains("permission denied")));
    }

    #[test]
    fn test_back_keys() {
        let mut screen = screen_with(true);
        screen.update(Key::Left);
        assert!(screen.should_go_back());

        let mut screen = screen_with(true);
        screen.update(Key::Esc);
        assert!(screen.should_go_back());
    }

    #[test]
    fn test_commit_writes_trimmed_values() {
        let mut screen = screen_with(true);
        screen.update(Key::Tab);
        for _ in 0..4 {
            screen.update(Key::Backspace);
        }
        type_text(&mut screen, "trunk");
        let mut config = Config::default();
        screen.commit(&mut config);
        assert_eq!(config.git.default_branch, "trunk");
        assert_eq!(config.git.repo_path, ".");
    }
}
