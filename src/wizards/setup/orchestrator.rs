//! Wizard orchestration
//!
//! Owns the configuration being built, one slot per step, and the external
//! collaborators. Routes keys to the active screen and applies the transition the
//! screen asks for.

use ratatui::text::Text;

use crate::config::{Config, ConfigStore};
use crate::git::GitBackend;
use crate::input::Key;
use crate::tui::theme::Theme;

use super::screen::{Effect, EffectResult, Outcome};
use super::screens::{ActiveScreen, CompleteScreen};
use super::step::WizardStep;

/// What a key did to the wizard as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stayed on the same step
    None,
    /// Moved forward to a freshly built step
    Forward(WizardStep),
    /// Returned to an earlier step
    Back(WizardStep),
    /// Saved (or tried to) and reached the completion step
    Completed,
    /// The completion step was acknowledged
    Dismissed,
    /// Interrupted or skipped
    Cancelled,
}

/// The setup wizard state machine
pub struct Wizard {
    config: Config,
    step: WizardStep,
    /// One slot per step; a slot is filled the first time its step is entered
    screens: Vec<Option<ActiveScreen>>,
    git: Box<dyn GitBackend>,
    store: Box<dyn ConfigStore>,
    cancelled: bool,
    dismissed: bool,
    save_error: Option<String>,
}

impl Wizard {
    /// Start a wizard on the welcome step, seeded from `config`
    pub fn new(config: Config, git: Box<dyn GitBackend>, store: Box<dyn ConfigStore>) -> Self {
        let mut screens: Vec<Option<ActiveScreen>> =
            std::iter::repeat_with(|| None).take(WizardStep::COUNT).collect();
        screens[WizardStep::Welcome.index()] =
            ActiveScreen::build(WizardStep::Welcome, &config, git.as_ref());

        Self {
            config,
            step: WizardStep::Welcome,
            screens,
            git,
            store,
            cancelled: false,
            dismissed: false,
            save_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// (1-based position, total steps)
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index() + 1, WizardStep::COUNT)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Whether the completion step has been reached
    pub fn is_completed(&self) -> bool {
        self.step == WizardStep::Complete
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Whether the wizard accepts no more input
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.dismissed
    }

    /// Error from the last save attempt, if it failed
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn active_screen(&self) -> Option<&ActiveScreen> {
        self.screens.get(self.step.index()).and_then(Option::as_ref)
    }

    /// Footer hints for the active screen
    pub fn hints(&self) -> &'static str {
        self.active_screen()
            .map(|s| s.as_screen().hints())
            .unwrap_or("")
    }

    /// Render the active screen
    pub fn render(&self, theme: &Theme) -> Text<'static> {
        self.active_screen()
            .map(|s| s.as_screen().render(theme))
            .unwrap_or_default()
    }

    /// Process one key
    pub fn handle_key(&mut self, key: Key) -> Transition {
        if self.is_finished() {
            return Transition::None;
        }

        if key == Key::Interrupt {
            tracing::info!("Setup interrupted at step {:?}", self.step);
            self.cancelled = true;
            return Transition::Cancelled;
        }

        let index = self.step.index();
        let Some(active) = self.screens.get_mut(index).and_then(Option::as_mut) else {
            debug_assert!(false, "no screen in the slot of active step {:?}", self.step);
            return Transition::None;
        };
        let screen = active.as_screen_mut();

        screen.nav_mut().reset();
        if let Some(effect) = screen.update(key) {
            let result = run_effect(self.git.as_ref(), &effect);
            screen.resolve(result);
        }

        match screen.nav().requested() {
            None => Transition::None,
            Some(Outcome::Skip) => self.skip(),
            Some(Outcome::Back) => self.go_back(),
            Some(Outcome::Continue) | Some(Outcome::Save) => self.go_forward(),
        }
    }

    fn skip(&mut self) -> Transition {
        if !self.step.is_first() {
            return Transition::None;
        }
        tracing::info!("Setup skipped");
        self.cancelled = true;
        Transition::Cancelled
    }

    fn go_back(&mut self) -> Transition {
        if self.step == WizardStep::Complete {
            return Transition::None;
        }
        let Some(previous) = self.step.previous() else {
            return Transition::None;
        };

        // Slots behind the active step are always filled; rebuild if that ever breaks
        if self.screens[previous.index()].is_none() {
            debug_assert!(false, "empty slot behind active step {:?}", self.step);
            self.screens[previous.index()] =
                ActiveScreen::build(previous, &self.config, self.git.as_ref());
        }

        tracing::debug!("Back from {:?} to {:?}", self.step, previous);
        self.step = previous;
        Transition::Back(previous)
    }

    fn go_forward(&mut self) -> Transition {
        if let Some(active) = self.screens.get(self.step.index()).and_then(Option::as_ref) {
            active.as_screen().commit(&mut self.config);
        }

        match self.step {
            WizardStep::Complete => {
                self.dismissed = true;
                Transition::Dismissed
            }
            WizardStep::Summary => {
                let screen = self.save();
                self.enter(WizardStep::Complete, ActiveScreen::Complete(screen));
                Transition::Completed
            }
            step => {
                let Some(next) = step.next() else {
                    return Transition::None;
                };
                let Some(screen) = ActiveScreen::build(next, &self.config, self.git.as_ref())
                else {
                    return Transition::None;
                };
                self.enter(next, screen);
                Transition::Forward(next)
            }
        }
    }

    /// Persist the configuration and build the completion screen for the result
    fn save(&mut self) -> CompleteScreen {
        let location = self.store.location();
        match self.store.save(&self.config) {
            Ok(()) => {
                tracing::info!("Setup complete, configuration at {}", location.display());
                self.save_error = None;
                CompleteScreen::saved(location)
            }
            Err(e) => {
                tracing::error!("Failed to save configuration: {}", e);
                let message = e.to_string();
                self.save_error = Some(message.clone());
                CompleteScreen::failed(location, message)
            }
        }
    }

    fn enter(&mut self, step: WizardStep, screen: ActiveScreen) {
        tracing::info!("Entering setup step {:?}", step);
        self.screens[step.index()] = Some(screen);
        self.step = step;
    }
}

/// Run a screen's side effect against the git backend
fn run_effect(git: &dyn GitBackend, effect: &Effect) -> EffectResult {
    match effect {
        Effect::InspectRepository(path) => {
            let is_repo = git.is_git_repo(path);
            tracing::debug!("Repository check for {}: {}", path.display(), is_repo);
            EffectResult::Repository { is_repo }
        }
        Effect::InitRepository {
            path,
            default_branch,
        } => {
            let result = git
                .init_repository(path, default_branch)
                .map_err(|e| format!("{:#}", e));
            if let Err(message) = &result {
                tracing::error!("git init failed at {}: {}", path.display(), message);
            }
            EffectResult::Initialized(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizards::setup::screen::plain_text;
    use crate::wizards::setup::screens::test_support::{FakeGit, MemoryStore};

    fn wizard_with(config: Config, git: FakeGit, store: MemoryStore) -> Wizard {
        Wizard::new(config, Box::new(git), Box::new(store))
    }

    fn ready_config() -> Config {
        let mut config = Config::default();
        config.ai.api_key = "csk-test-key-123".to_string();
        config
    }

    fn wizard() -> (Wizard, MemoryStore) {
        let store = MemoryStore::default();
        (
            wizard_with(ready_config(), FakeGit::new(true), store.clone()),
            store,
        )
    }

    /// Accept the active step with its current values
    ///
    /// Form steps must still have focus on their first field, so that shift+tab
    /// wraps onto the terminal action.
    fn accept(wizard: &mut Wizard) -> Transition {
        match wizard.step() {
            WizardStep::Welcome | WizardStep::Summary | WizardStep::Complete => {
                wizard.handle_key(Key::Enter)
            }
            _ => {
                // The terminal action is always the last visible field
                wizard.handle_key(Key::BackTab);
                wizard.handle_key(Key::Enter)
            }
        }
    }

    fn type_text(wizard: &mut Wizard, text: &str) {
        for c in text.chars() {
            if let Some(key) = Key::from_char(c) {
                wizard.handle_key(key);
            }
        }
    }

    #[test]
    fn test_starts_on_welcome() {
        let (wizard, _) = wizard();
        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert_eq!(wizard.progress(), (1, 9));
        assert!(!wizard.is_completed());
        assert!(!wizard.is_cancelled());
        assert!(plain_text(&wizard.render(&Theme::default())).contains("Welcome to gitwise"));
    }

    #[test]
    fn test_full_run_saves_and_completes() {
        let (mut wizard, store) = wizard();
        let expected = [
            WizardStep::GitInit,
            WizardStep::GitHubSetup,
            WizardStep::Branches,
            WizardStep::Commits,
            WizardStep::Naming,
            WizardStep::Ai,
            WizardStep::Summary,
        ];
        for step in expected {
            assert_eq!(accept(&mut wizard), Transition::Forward(step));
        }
        assert_eq!(wizard.progress(), (8, 9));
        assert_eq!(accept(&mut wizard), Transition::Completed);
        assert!(wizard.is_completed());
        assert!(wizard.save_error().is_none());

        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], *wizard.config());
        assert_eq!(saved[0].ai.api_key, "csk-test-key-123");
        drop(saved);

        assert_eq!(accept(&mut wizard), Transition::Dismissed);
        assert!(wizard.is_dismissed());
        assert_eq!(wizard.handle_key(Key::Enter), Transition::None);
    }

    #[test]
    fn test_save_failure_still_completes() {
        let mut wizard = wizard_with(ready_config(), FakeGit::new(true), MemoryStore::failing());
        while wizard.step() != WizardStep::Summary {
            accept(&mut wizard);
        }
        assert_eq!(accept(&mut wizard), Transition::Completed);
        assert!(wizard.is_completed());
        let error = wizard.save_error().unwrap_or_default().to_string();
        assert!(error.contains("permission denied"));
        assert!(plain_text(&wizard.render(&Theme::default())).contains(&error));
    }

    #[test]
    fn test_interrupt_cancels_from_any_step() {
        let (mut wizard, store) = wizard();
        accept(&mut wizard);
        accept(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::GitHubSetup);
        assert_eq!(wizard.handle_key(Key::Interrupt), Transition::Cancelled);
        assert!(wizard.is_cancelled());

        // Nothing reaches the screens afterwards
        assert_eq!(wizard.handle_key(Key::Enter), Transition::None);
        assert_eq!(wizard.step(), WizardStep::GitHubSetup);
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_interrupt_beats_pending_confirmation() {
        let (mut wizard, _) = wizard();
        while wizard.step() != WizardStep::Branches {
            accept(&mut wizard);
        }
        wizard.handle_key(Key::Tab);
        wizard.handle_key(Key::Tab);
        wizard.handle_key(Key::Delete);
        assert_eq!(wizard.handle_key(Key::Interrupt), Transition::Cancelled);
    }

    #[test]
    fn test_skip_on_welcome_cancels_without_saving() {
        let (mut wizard, store) = wizard();
        assert_eq!(wizard.handle_key(Key::Esc), Transition::Cancelled);
        assert!(wizard.is_cancelled());
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let (mut wizard, _) = wizard();
        assert_eq!(wizard.go_back(), Transition::None);
        assert_eq!(wizard.step(), WizardStep::Welcome);
    }

    #[test]
    fn test_back_reuses_screen_state() {
        let (mut wizard, _) = wizard();
        accept(&mut wizard);
        // Leave focus on Continue of the repository step
        assert_eq!(accept(&mut wizard), Transition::Forward(WizardStep::GitHubSetup));
        assert_eq!(
            wizard.handle_key(Key::Esc),
            Transition::Back(WizardStep::GitInit)
        );
        match wizard.active_screen() {
            Some(ActiveScreen::GitInit(screen)) => assert_eq!(
                screen.focused_field(),
                Some(crate::wizards::setup::screens::git_init::Field::Continue)
            ),
            _ => panic!("expected the repository screen"),
        }
    }

    #[test]
    fn test_back_then_forward_discards_uncommitted_edits() {
        let (mut wizard, _) = wizard();
        accept(&mut wizard);
        accept(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::GitHubSetup);

        // Enable GitHub and type a username without continuing
        wizard.handle_key(Key::Space);
        wizard.handle_key(Key::Tab);
        type_text(&mut wizard, "octocat");
        assert!(plain_text(&wizard.render(&Theme::default())).contains("octocat"));

        wizard.handle_key(Key::Esc);
        assert_eq!(wizard.step(), WizardStep::GitInit);
        // Focus is still on Continue from the first pass
        assert_eq!(
            wizard.handle_key(Key::Enter),
            Transition::Forward(WizardStep::GitHubSetup)
        );
        assert!(!plain_text(&wizard.render(&Theme::default())).contains("octocat"));
        assert!(!wizard.config().github.enabled);
    }

    #[test]
    fn test_forward_commits_into_config() {
        let (mut wizard, _) = wizard();
        accept(&mut wizard);
        wizard.handle_key(Key::Tab);
        for _ in 0..4 {
            wizard.handle_key(Key::Backspace);
        }
        type_text(&mut wizard, "trunk");
        assert_eq!(wizard.config().git.default_branch, "main");
        // DefaultBranch -> Continue
        wizard.handle_key(Key::Tab);
        assert_eq!(
            wizard.handle_key(Key::Enter),
            Transition::Forward(WizardStep::GitHubSetup)
        );
        assert_eq!(wizard.config().git.default_branch, "trunk");
    }

    #[test]
    fn test_welcome_round_trip_rebuilds_repository_step() {
        let (mut wizard, _) = wizard();
        assert_eq!(accept(&mut wizard), Transition::Forward(WizardStep::GitInit));
        type_text(&mut wizard, "scratch-dir");
        assert!(plain_text(&wizard.render(&Theme::default())).contains("scratch-dir"));

        assert_eq!(
            wizard.handle_key(Key::Esc),
            Transition::Back(WizardStep::Welcome)
        );
        assert_eq!(
            wizard.handle_key(Key::Enter),
            Transition::Forward(WizardStep::GitInit)
        );
        assert!(!plain_text(&wizard.render(&Theme::default())).contains("scratch-dir"));
        assert_eq!(wizard.config(), &ready_config());
    }

    #[test]
    fn test_validation_error_blocks_forward() {
        let mut config = ready_config();
        config.ai.api_key.clear();
        let mut wizard = wizard_with(config, FakeGit::new(true), MemoryStore::default());
        while wizard.step() != WizardStep::Ai {
            accept(&mut wizard);
        }
        assert_eq!(accept(&mut wizard), Transition::None);
        assert_eq!(wizard.step(), WizardStep::Ai);
        assert!(plain_text(&wizard.render(&Theme::default())).contains("API key is required"));

        // Errors never block going back
        assert_eq!(
            wizard.handle_key(Key::Esc),
            Transition::Back(WizardStep::Naming)
        );
    }

    #[test]
    fn test_repository_initialization_effect() {
        let git = FakeGit::new(false);
        let calls = git.init_calls.clone();
        let mut wizard = wizard_with(ready_config(), git, MemoryStore::default());
        accept(&mut wizard);
        wizard.handle_key(Key::Tab);
        wizard.handle_key(Key::Enter);
        assert_eq!(calls.get(), 1);
        let rendered = plain_text(&wizard.render(&Theme::default()));
        assert!(rendered.contains("Initialized git repository"));
        assert!(rendered.contains("✓ git repository"));
    }

    #[test]
    fn test_repository_initialization_failure_is_retryable() {
        let git = FakeGit::new(false).failing_init("disk full");
        let calls = git.init_calls.clone();
        let mut wizard = wizard_with(ready_config(), git, MemoryStore::default());
        accept(&mut wizard);
        wizard.handle_key(Key::Tab);
        wizard.handle_key(Key::Enter);
        assert!(plain_text(&wizard.render(&Theme::default())).contains("disk full"));
        wizard.handle_key(Key::Enter);
        assert_eq!(calls.get(), 2);
    }
}
