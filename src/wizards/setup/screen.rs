//! Shared screen contract
//!
//! Every wizard step implements [`Screen`]. The wizard feeds keys to the active
//! screen, executes any [`Effect`] it asks for, then reads the outcome flags.

use std::path::PathBuf;

use ratatui::text::{Line, Span, Text};

use crate::config::Config;
use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::widgets::{cycle_next, cycle_prev, CheckboxGroup};

use super::step::WizardStep;

/// Navigation requested by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Back,
    Save,
    Skip,
}

/// Outcome flags of a screen; at most one is raised per update
#[derive(Debug, Clone, Default)]
pub struct Nav {
    requested: Option<Outcome>,
}

impl Nav {
    pub fn request(&mut self, outcome: Outcome) {
        debug_assert!(
            self.requested.is_none(),
            "screen requested {:?} after {:?} in one update",
            outcome,
            self.requested
        );
        self.requested = Some(outcome);
    }

    pub fn reset(&mut self) {
        self.requested = None;
    }

    pub fn requested(&self) -> Option<Outcome> {
        self.requested
    }

    pub fn is(&self, outcome: Outcome) -> bool {
        self.requested == Some(outcome)
    }
}

/// Side effect a screen asks the wizard to run on its behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-check whether a path is a git repository
    InspectRepository(PathBuf),
    /// Run `git init` at a path (blocking)
    InitRepository {
        path: PathBuf,
        default_branch: String,
    },
}

/// Result of an [`Effect`], handed back to the screen that requested it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectResult {
    Repository { is_repo: bool },
    Initialized(Result<(), String>),
}

/// A validation or operation error attached to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<F> {
    pub field: F,
    pub message: String,
}

impl<F: PartialEq> FieldError<F> {
    pub fn new(field: F, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Clear `error` if it belongs to `field`
pub fn clear_error_for<F: PartialEq>(error: &mut Option<FieldError<F>>, field: F) {
    if error.as_ref().is_some_and(|e| e.field == field) {
        *error = None;
    }
}

/// Cyclic focus cursor over a screen's visible fields
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusRing {
    index: usize,
}

impl FocusRing {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current<F: Copy>(&self, fields: &[F]) -> Option<F> {
        fields.get(self.index).copied()
    }

    pub fn next(&mut self, len: usize) {
        self.index = cycle_next(self.index, len);
    }

    pub fn previous(&mut self, len: usize) {
        self.index = cycle_prev(self.index, len);
    }

    /// Move focus to `field`; returns false if it is not visible
    pub fn focus<F: PartialEq>(&mut self, fields: &[F], field: F) -> bool {
        match fields.iter().position(|f| *f == field) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Re-aim the cursor after the visible field list changed
    ///
    /// Stays on `previous` if it is still visible, otherwise clamps into range.
    pub fn retarget<F: PartialEq>(&mut self, previous: Option<F>, fields: &[F]) {
        if let Some(field) = previous {
            if self.focus(fields, field) {
                return;
            }
        }
        self.index = self.index.min(fields.len().saturating_sub(1));
    }

    /// Apply tab/shift-tab/up/down; returns whether the key was consumed
    pub fn handle_key(&mut self, key: Key, len: usize) -> bool {
        match key {
            Key::Tab | Key::Down => {
                self.next(len);
                true
            }
            Key::BackTab | Key::Up => {
                self.previous(len);
                true
            }
            _ => false,
        }
    }
}

/// Move between items of a focused checkbox group with up/down
///
/// Returns false at the group's edges so the key can move field focus instead.
pub fn step_within_group(group: &mut CheckboxGroup, key: Key) -> bool {
    match key {
        Key::Down if group.focused_index() + 1 < group.len() => {
            group.next();
            true
        }
        Key::Up if group.focused_index() > 0 && !group.is_empty() => {
            group.previous();
            true
        }
        _ => false,
    }
}

/// Uniform interface of a wizard step
pub trait Screen {
    fn step(&self) -> WizardStep;

    /// Process one key; may ask the wizard to run a side effect
    fn update(&mut self, key: Key) -> Option<Effect>;

    /// Receive the result of an effect requested by the last update
    fn resolve(&mut self, _result: EffectResult) {}

    /// Write this screen's values into the configuration (forward transitions only)
    fn commit(&self, _config: &mut Config) {}

    fn render(&self, theme: &Theme) -> Text<'static>;

    /// Key hints for the footer
    fn hints(&self) -> &'static str;

    /// Current screen-local error message
    fn error(&self) -> Option<&str> {
        None
    }

    fn nav(&self) -> &Nav;

    fn nav_mut(&mut self) -> &mut Nav;

    fn should_continue(&self) -> bool {
        self.nav().is(Outcome::Continue)
    }

    fn should_go_back(&self) -> bool {
        self.nav().is(Outcome::Back)
    }

    fn should_save(&self) -> bool {
        self.nav().is(Outcome::Save)
    }

    fn should_skip(&self) -> bool {
        self.nav().is(Outcome::Skip)
    }
}

/// Expand `~` in a user-entered path
pub fn expand_path(input: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(input.trim()).into_owned())
}

/// Title and subtitle block at the top of every screen
pub fn heading(title: &str, subtitle: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(title.to_string(), theme.header_style())),
        Line::from(Span::styled(subtitle.to_string(), theme.muted_style())),
        Line::from(""),
    ]
}

/// Append the error line, if any
pub fn push_error(lines: &mut Vec<Line<'static>>, error: Option<&str>, theme: &Theme) {
    if let Some(message) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("✗ {}", message),
            theme.error_style(),
        )));
    }
}

/// Append a labelled preview block
pub fn push_preview(lines: &mut Vec<Line<'static>>, preview: &str, theme: &Theme) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Preview:", theme.muted_style())));
    for line in preview.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {}", line),
            theme.preview_style(),
        )));
    }
    if preview.is_empty() {
        lines.push(Line::from(""));
    }
}

/// Flatten rendered text into a plain string, one line per row
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
