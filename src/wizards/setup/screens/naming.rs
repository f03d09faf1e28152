//! Naming screen: branch naming rules with a live preview

use ratatui::text::{Line, Text};

use crate::config::Config;
use crate::input::Key;
use crate::preview::{branch_preview, BranchPreviewInput, DEFAULT_BRANCH_PATTERN};
use crate::tui::theme::Theme;
use crate::tui::widgets::{Button, Checkbox, CheckboxGroup, Dropdown, TextField};

use super::super::screen::{
    heading, push_preview, step_within_group, Effect, FocusRing, Nav, Outcome, Screen,
};
use super::super::step::WizardStep;

/// Preset branch patterns
pub const PATTERN_PRESETS: &[&str] = &[
    DEFAULT_BRANCH_PATTERN,
    "{prefix}/{issue}-{description}",
    "{issue}/{description}",
    "{description}",
];

/// Dropdown entry that reveals the custom pattern field
pub const CUSTOM_PATTERN: &str = "Custom…";

/// Branch prefixes offered by default
pub const BRANCH_PREFIXES: &[&str] = &["feature", "bugfix", "hotfix", "release", "chore", "docs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Enforce,
    Pattern,
    CustomPattern,
    Prefixes,
    Continue,
}

/// Branch naming step
#[derive(Debug, Clone)]
pub struct NamingScreen {
    enforce: Checkbox,
    pattern: Dropdown,
    custom_pattern: TextField,
    prefixes: CheckboxGroup,
    continue_button: Button,
    preview: String,
    focus: FocusRing,
    nav: Nav,
}

impl NamingScreen {
    pub fn new(config: &Config) -> Self {
        let naming = &config.naming;
        let mut pattern = Dropdown::new(
            PATTERN_PRESETS
                .iter()
                .copied()
                .chain(std::iter::once(CUSTOM_PATTERN)),
        );
        let mut custom_pattern = TextField::new(DEFAULT_BRANCH_PATTERN);
        if !pattern.select_option(&naming.pattern) {
            pattern.select_option(CUSTOM_PATTERN);
            custom_pattern.set_value(naming.pattern.clone());
        }

        let mut prefixes = CheckboxGroup::from_labels(BRANCH_PREFIXES, &naming.prefixes);
        for extra in &naming.prefixes {
            if !prefixes.contains(extra) {
                prefixes.push(extra.clone(), true);
            }
        }

        let mut screen = Self {
            enforce: Checkbox::new("Enforce branch naming", naming.enforce),
            pattern,
            custom_pattern,
            prefixes,
            continue_button: Button::new("Continue"),
            preview: String::new(),
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.refresh_preview();
        screen.sync_focus();
        screen
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Enforce];
        if self.enforce.is_checked() {
            fields.push(Field::Pattern);
            if self.is_custom() {
                fields.push(Field::CustomPattern);
            }
            fields.push(Field::Prefixes);
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

    fn is_custom(&self) -> bool {
        self.pattern.selected_option() == CUSTOM_PATTERN
    }

    /// The pattern that would be saved
    pub fn effective_pattern(&self) -> String {
        if self.is_custom() {
            match self.custom_pattern.value().trim() {
                "" => DEFAULT_BRANCH_PATTERN.to_string(),
                custom => custom.to_string(),
            }
        } else {
            self.pattern.selected_option().to_string()
        }
    }

    fn refresh_preview(&mut self) {
        let pattern = self.effective_pattern();
        let prefixes = self.prefixes.checked();
        self.preview = branch_preview(&BranchPreviewInput {
            enforce: self.enforce.is_checked(),
            pattern: &pattern,
            prefixes: &prefixes,
        });
    }

    /// Keys handled by the pattern dropdown; returns whether the key was consumed
    fn handle_dropdown(&mut self, key: Key) -> bool {
        let previous = self.focused_field();
        let consumed = match key {
            Key::Enter => {
                self.pattern.toggle();
                true
            }
            Key::Esc if self.pattern.is_open() => {
                self.pattern.close();
                true
            }
            // left/right never leave the dropdown, even while closed
            Key::Down | Key::Right => self.pattern.next() || key == Key::Right,
            Key::Up | Key::Left => self.pattern.previous() || key == Key::Left,
            _ => false,
        };
        let fields = self.visible_fields();
        self.focus.retarget(previous, &fields);
        consumed
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.enforce.set_focused(focused == Some(Field::Enforce));
        self.custom_pattern
            .set_focused(focused == Some(Field::CustomPattern));
        self.continue_button
            .set_focused(focused == Some(Field::Continue));
        if focused != Some(Field::Pattern) {
            self.pattern.close();
        }
    }
}

impl Screen for NamingScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Naming
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        let fields = self.visible_fields();
        let Some(field) = self.focus.current(&fields) else {
            return None;
        };

        if field == Field::Pattern && self.handle_dropdown(key) {
            self.refresh_preview();
            self.sync_focus();
            return None;
        }

        match (field, key) {
            (_, Key::Esc) => self.nav.request(Outcome::Back),
            (Field::Enforce, Key::Space) => {
                self.enforce.toggle();
                let fields = self.visible_fields();
                self.focus.retarget(Some(Field::Enforce), &fields);
            }
            (Field::Prefixes, Key::Space) => self.prefixes.toggle(),
            (Field::Prefixes, Key::Up | Key::Down)
                if step_within_group(&mut self.prefixes, key) => {}
            (Field::Continue, Key::Enter) => self.nav.request(Outcome::Continue),
            (_, Key::Enter) => self.focus.next(fields.len()),
            (_, other) => {
                if !self.focus.handle_key(other, fields.len()) && field == Field::CustomPattern {
                    self.custom_pattern.handle_key(other);
                }
            }
        }
        self.refresh_preview();
        self.sync_focus();
        None
    }

    fn commit(&self, config: &mut Config) {
        let naming = &mut config.naming;
        naming.enforce = self.enforce.is_checked();
        naming.pattern = self.effective_pattern();
        naming.prefixes = self.prefixes.checked();
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let focused = self.focused_field();
        let mut lines = heading(
            "Branch naming",
            "Rules gitwise applies when it creates or checks branch names.",
            theme,
        );
        lines.push(self.enforce.render_line(theme));
        if self.enforce.is_checked() {
            lines.extend(self.pattern.render_lines(
                "Pattern",
                focused == Some(Field::Pattern),
                theme,
            ));
            if self.is_custom() {
                lines.push(self.custom_pattern.render_line("Custom pattern", theme));
            }
            lines.extend(self.prefixes.render_lines(
                "Prefixes",
                focused == Some(Field::Prefixes),
                theme,
            ));
        }
        push_preview(&mut lines, &self.preview, theme);
        lines.push(Line::from(""));
        lines.push(self.continue_button.render_line(theme));
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        if self.pattern.is_open() {
            "↑↓ choose · enter close · esc close"
        } else {
            "tab move · enter open · space toggle · esc back"
        }
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
    use crate::preview::NO_NAMING_RESTRICTION;
    use crate::wizards::setup::screens::test_support::type_text;

    fn screen() -> NamingScreen {
        NamingScreen::new(&Config::default())
    }

    #[test]
    fn test_default_preview() {
        assert_eq!(screen().preview(), "feature/add-login-page");
    }

    #[test]
    fn test_disabling_hides_fields_and_preview() {
        let mut screen = screen();
        screen.update(Key::Space);
        assert_eq!(screen.visible_fields(), vec![Field::Enforce, Field::Continue]);
        assert_eq!(screen.preview(), NO_NAMING_RESTRICTION);
        assert_eq!(screen.focused_field(), Some(Field::Enforce));
    }

    #[test]
    fn test_dropdown_selection() {
        let mut screen = screen();
        screen.update(Key::Tab);
        assert_eq!(screen.focused_field(), Some(Field::Pattern));

        // Closed dropdown: down moves focus
        screen.update(Key::Down);
        assert_eq!(screen.focused_field(), Some(Field::Prefixes));
        screen.update(Key::Up);

        screen.update(Key::Enter);
        screen.update(Key::Down);
        assert_eq!(screen.preview(), "feature/PROJ-123-add-login-page");
        screen.update(Key::Enter);
        assert_eq!(screen.focused_field(), Some(Field::Pattern));
    }

    #[test]
    fn test_custom_pattern() {
        let mut screen = screen();
        screen.update(Key::Tab);
        screen.update(Key::Enter);
        screen.update(Key::Up);
        screen.update(Key::Enter);
        assert!(screen.visible_fields().contains(&Field::CustomPattern));
        assert_eq!(screen.preview(), "feature/add-login-page");

        screen.update(Key::Tab);
        assert_eq!(screen.focused_field(), Some(Field::CustomPattern));
        type_text(&mut screen, "{prefix}-{issue}");
        assert_eq!(screen.preview(), "feature-PROJ-123");

        let mut config = Config::default();
        screen.commit(&mut config);
        assert_eq!(config.naming.pattern, "{prefix}-{issue}");
    }

    #[test]
    fn test_loads_custom_pattern_from_config() {
        let mut config = Config::default();
        config.naming.pattern = "{issue}_{description}".to_string();
        let screen = NamingScreen::new(&config);
        assert!(screen.visible_fields().contains(&Field::CustomPattern));
        assert_eq!(screen.effective_pattern(), "{issue}_{description}");
    }

    #[test]
    fn test_esc_closes_open_dropdown_before_back() {
        let mut screen = screen();
        screen.update(Key::Tab);
        screen.update(Key::Enter);
        screen.update(Key::Esc);
        assert!(!screen.should_go_back());
        screen.update(Key::Esc);
        assert!(screen.should_go_back());
    }

    #[test]
    fn test_prefix_toggle_changes_preview() {
        let mut screen = screen();
        screen.update(Key::BackTab);
        screen.update(Key::BackTab);
        assert_eq!(screen.focused_field(), Some(Field::Prefixes));
        screen.update(Key::Space);
        assert_eq!(screen.preview(), "bugfix/add-login-page");
    }
}
