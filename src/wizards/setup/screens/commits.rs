//! Commits screen: commit message convention with a live preview

use ratatui::text::{Line, Text};

use crate::config::{CommitConvention, Config};
use crate::input::Key;
use crate::preview::{commit_preview, CommitPreviewInput, DEFAULT_COMMIT_TEMPLATE};
use crate::tui::theme::Theme;
use crate::tui::widgets::{Button, Checkbox, CheckboxGroup, RadioGroup, TextField};

use super::super::screen::{
    clear_error_for, heading, push_error, push_preview, step_within_group, Effect, FieldError,
    FocusRing, Nav, Outcome, Screen,
};
use super::super::step::WizardStep;

/// Commit types offered by default
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Convention,
    Types,
    RequireScope,
    IncludeBody,
    Template,
    Continue,
}

/// Commit convention step
#[derive(Debug, Clone)]
pub struct CommitsScreen {
    convention: RadioGroup,
    types: CheckboxGroup,
    require_scope: Checkbox,
    include_body: Checkbox,
    template: TextField,
    continue_button: Button,
    preview: String,
    error: Option<FieldError<Field>>,
    focus: FocusRing,
    nav: Nav,
}

impl CommitsScreen {
    pub fn new(config: &Config) -> Self {
        let commits = &config.commits;
        let mut convention =
            RadioGroup::new(CommitConvention::ALL.iter().map(|c| c.label()));
        if let Some(index) = CommitConvention::ALL
            .iter()
            .position(|c| *c == commits.convention)
        {
            convention.select(index);
        }

        let mut types = CheckboxGroup::from_labels(COMMIT_TYPES, &commits.types);
        for extra in &commits.types {
            if !types.contains(extra) {
                types.push(extra.clone(), true);
            }
        }

        let mut screen = Self {
            convention,
            types,
            require_scope: Checkbox::new("Require a scope", commits.require_scope),
            include_body: Checkbox::new("Include a body", commits.include_body),
            template: TextField::new(DEFAULT_COMMIT_TEMPLATE).with_value(commits.template.clone()),
            continue_button: Button::new("Continue"),
            preview: String::new(),
            error: None,
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.refresh_preview();
        screen.sync_focus();
        screen
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::Convention,
            Field::Types,
            Field::RequireScope,
            Field::IncludeBody,
        ];
        if self.selected_convention() == CommitConvention::Custom {
            fields.push(Field::Template);
        }
        fields.push(Field::Continue);
        fields
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.current(&self.visible_fields())
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn error_field(&self) -> Option<Field> {
        self.error.as_ref().map(|e| e.field)
    }

    fn selected_convention(&self) -> CommitConvention {
        CommitConvention::ALL
            .get(self.convention.selected())
            .copied()
            .unwrap_or_default()
    }

    fn refresh_preview(&mut self) {
        let types = self.types.checked();
        self.preview = commit_preview(&CommitPreviewInput {
            convention: self.selected_convention(),
            types: &types,
            require_scope: self.require_scope.is_checked(),
            include_body: self.include_body.is_checked(),
            template: self.template.value(),
        });
    }

    fn validate(&self) -> Result<(), FieldError<Field>> {
        if self.selected_convention().uses_types() && self.types.checked().is_empty() {
            return Err(FieldError::new(
                Field::Types,
                "Select at least one commit type",
            ));
        }
        Ok(())
    }

    fn change_convention(&mut self, forward: bool) {
        let previous = self.focused_field();
        if forward {
            self.convention.next();
        } else {
            self.convention.previous();
        }
        let fields = self.visible_fields();
        self.focus.retarget(previous, &fields);
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.require_scope
            .set_focused(focused == Some(Field::RequireScope));
        self.include_body
            .set_focused(focused == Some(Field::IncludeBody));
        self.template.set_focused(focused == Some(Field::Template));
        self.continue_button
            .set_focused(focused == Some(Field::Continue));
    }
}

impl Screen for CommitsScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Commits
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        let fields = self.visible_fields();
        let Some(field) = self.focus.current(&fields) else {
            return None;
        };

        match (field, key) {
            (_, Key::Esc) => self.nav.request(Outcome::Back),
            (Field::Convention, Key::Right | Key::Space | Key::Enter) => {
                self.change_convention(true)
            }
            (Field::Convention, Key::Left) => self.change_convention(false),
            (Field::Types, Key::Space) => {
                self.types.toggle();
                clear_error_for(&mut self.error, Field::Types);
            }
            (Field::Types, Key::Up | Key::Down) if step_within_group(&mut self.types, key) => {}
            (Field::RequireScope, Key::Space) => self.require_scope.toggle(),
            (Field::IncludeBody, Key::Space) => self.include_body.toggle(),
            (Field::Continue, Key::Enter) => match self.validate() {
                Ok(()) => {
                    self.error = None;
                    self.nav.request(Outcome::Continue);
                }
                Err(error) => self.error = Some(error),
            },
            (_, Key::Enter) => self.focus.next(fields.len()),
            (_, other) => {
                if !self.focus.handle_key(other, fields.len()) && field == Field::Template {
                    self.template.handle_key(other);
                }
            }
        }
        self.refresh_preview();
        self.sync_focus();
        None
    }

    fn commit(&self, config: &mut Config) {
        let commits = &mut config.commits;
        commits.convention = self.selected_convention();
        commits.types = self.types.checked();
        commits.require_scope = self.require_scope.is_checked();
        commits.include_body = self.include_body.is_checked();
        commits.template = self.template.value().trim().to_string();
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let focused = self.focused_field();
        let mut lines = heading(
            "Commit conventions",
            "Pick the format gitwise uses to write and check commit messages.",
            theme,
        );
        lines.push(self.convention.render_line(
            "Convention",
            focused == Some(Field::Convention),
            theme,
        ));
        lines.extend(
            self.types
                .render_lines("Commit types", focused == Some(Field::Types), theme),
        );
        lines.push(self.require_scope.render_line(theme));
        lines.push(self.include_body.render_line(theme));
        if self.selected_convention() == CommitConvention::Custom {
            lines.push(self.template.render_line("Template", theme));
        }
        push_preview(&mut lines, &self.preview, theme);
        lines.push(Line::from(""));
        lines.push(self.continue_button.render_line(theme));
        push_error(&mut lines, self.error(), theme);
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        "tab move · ←/→ convention · ↑↓ types · space toggle · esc back"
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
