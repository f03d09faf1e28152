//! GitHub screen: account credentials and pull request preferences

use ratatui::text::{Line, Span, Text};

use crate::config::Config;
use crate::git::GitBackend;
use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::widgets::{Button, Checkbox, TextField};

use super::super::screen::{
    clear_error_for, expand_path, heading, push_error, Effect, FieldError, FocusRing, Nav,
    Outcome, Screen,
};
use super::super::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Enabled,
    Username,
    Token,
    CreatePullRequests,
    Continue,
}

/// GitHub integration step
#[derive(Debug, Clone)]
pub struct GitHubScreen {
    enabled: Checkbox,
    username: TextField,
    token: TextField,
    create_pull_requests: Checkbox,
    continue_button: Button,
    remote: String,
    has_origin: bool,
    error: Option<FieldError<Field>>,
    focus: FocusRing,
    nav: Nav,
}

impl GitHubScreen {
    pub fn new(config: &Config, git: &dyn GitBackend) -> Self {
        let github = &config.github;
        let has_origin = git.has_origin_remote(&expand_path(&config.git.repo_path));
        let mut screen = Self {
            enabled: Checkbox::new("Enable GitHub integration", github.enabled),
            username: TextField::new("octocat").with_value(github.username.clone()),
            token: TextField::new("ghp_...")
                .with_value(github.token.clone())
                .password(),
            create_pull_requests: Checkbox::new(
                "Create pull requests from gitwise",
                github.create_pull_requests,
            ),
            continue_button: Button::new("Continue"),
            remote: github.remote.clone(),
            has_origin,
            error: None,
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.sync_focus();
        screen
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        if self.enabled.is_checked() {
            vec![
                Field::Enabled,
                Field::Username,
                Field::Token,
                Field::CreatePullRequests,
                Field::Continue,
            ]
        } else {
            vec![Field::Enabled, Field::Continue]
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.current(&self.visible_fields())
    }

    pub fn error_field(&self) -> Option<Field> {
        self.error.as_ref().map(|e| e.field)
    }

    fn validate(&self) -> Result<(), FieldError<Field>> {
        if !self.enabled.is_checked() {
            return Ok(());
        }
        if self.username.value().trim().is_empty() {
            return Err(FieldError::new(Field::Username, "GitHub username is required"));
        }
        if self.token.value().trim().is_empty() {
            return Err(FieldError::new(Field::Token, "GitHub token is required"));
        }
        Ok(())
    }

    fn toggle(&mut self, field: Field) {
        match field {
            Field::Enabled => {
                let previous = self.focused_field();
                self.enabled.toggle();
                let fields = self.visible_fields();
                self.focus.retarget(previous, &fields);
            }
            Field::CreatePullRequests => self.create_pull_requests.toggle(),
            _ => {}
        }
    }

    fn edit(&mut self, field: Field, key: Key) {
        let changed = match field {
            Field::Username => self.username.handle_key(key),
            Field::Token => self.token.handle_key(key),
            _ => false,
        };
        if changed {
            clear_error_for(&mut self.error, field);
        }
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.enabled.set_focused(focused == Some(Field::Enabled));
        self.username.set_focused(focused == Some(Field::Username));
        self.token.set_focused(focused == Some(Field::Token));
        self.create_pull_requests
            .set_focused(focused == Some(Field::CreatePullRequests));
        self.continue_button
            .set_focused(focused == Some(Field::Continue));
    }
}

impl Screen for GitHubScreen {
    fn step(&self) -> WizardStep {
        WizardStep::GitHubSetup
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        let fields = self.visible_fields();
        let Some(field) = self.focus.current(&fields) else {
            return None;
        };

        match (field, key) {
            (_, Key::Esc) => self.nav.request(Outcome::Back),
            (_, Key::Left) if self.focus.index() == 0 => self.nav.request(Outcome::Back),
            (Field::Enabled | Field::CreatePullRequests, Key::Space) => self.toggle(field),
            (Field::Continue, Key::Enter) => match self.validate() {
                Ok(()) => {
                    self.error = None;
                    self.nav.request(Outcome::Continue);
                }
                Err(error) => self.error = Some(error),
            },
            (_, Key::Enter) => self.focus.next(fields.len()),
            (_, other) => {
                if !self.focus.handle_key(other, fields.len()) {
                    self.edit(field, other);
                }
            }
        }
        self.sync_focus();
        None
    }

    fn commit(&self, config: &mut Config) {
        let github = &mut config.github;
        github.enabled = self.enabled.is_checked();
        github.username = self.username.value().trim().to_string();
        github.token = self.token.value().trim().to_string();
        github.create_pull_requests = self.create_pull_requests.is_checked();
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let mut lines = heading(
            "GitHub",
            "Connect gitwise to your GitHub account.",
            theme,
        );
        let remote = if self.has_origin {
            Span::styled(
                format!("✓ remote '{}' found", self.remote),
                theme.success_style(),
            )
        } else {
            Span::styled(
                format!("! no '{}' remote configured", self.remote),
                theme.muted_style(),
            )
        };
        lines.push(Line::from(vec![
            Span::styled("Remote: ", theme.muted_style()),
            remote,
        ]));
        lines.push(Line::from(""));
        lines.push(self.enabled.render_line(theme));
        if self.enabled.is_checked() {
            lines.push(self.username.render_line("Username", theme));
            lines.push(self.token.render_line("Token", theme));
            lines.push(self.create_pull_requests.render_line(theme));
        }
        lines.push(Line::from(""));
        lines.push(self.continue_button.render_line(theme));
        push_error(&mut lines, self.error(), theme);
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        "tab/↑↓ move · space toggle · enter next · esc back · ctrl+c quit"
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
