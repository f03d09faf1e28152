//! Concrete wizard screens

pub mod ai;
pub mod branches;
pub mod commits;
pub mod complete;
pub mod git_init;
pub mod github;
pub mod naming;
pub mod summary;
pub mod welcome;

#[cfg(test)]
pub(crate) mod test_support;

pub use ai::AiScreen;
pub use branches::BranchesScreen;
pub use commits::CommitsScreen;
pub use complete::CompleteScreen;
pub use git_init::GitInitScreen;
pub use github::GitHubScreen;
pub use naming::NamingScreen;
pub use summary::SummaryScreen;
pub use welcome::WelcomeScreen;

use crate::config::Config;
use crate::git::GitBackend;

use super::screen::Screen;
use super::step::WizardStep;

/// The screen occupying a wizard slot
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    Welcome(WelcomeScreen),
    GitInit(GitInitScreen),
    GitHub(GitHubScreen),
    Branches(BranchesScreen),
    Commits(CommitsScreen),
    Naming(NamingScreen),
    Ai(AiScreen),
    Summary(SummaryScreen),
    Complete(CompleteScreen),
}

impl ActiveScreen {
    /// Construct the screen for `step` fresh from the configuration
    ///
    /// Returns `None` for [`WizardStep::Complete`], whose screen depends on the save
    /// result and is built by the wizard.
    pub fn build(step: WizardStep, config: &Config, git: &dyn GitBackend) -> Option<Self> {
        let screen = match step {
            WizardStep::Welcome => ActiveScreen::Welcome(WelcomeScreen::new()),
            WizardStep::GitInit => ActiveScreen::GitInit(GitInitScreen::new(config, git)),
            WizardStep::GitHubSetup => ActiveScreen::GitHub(GitHubScreen::new(config, git)),
            WizardStep::Branches => ActiveScreen::Branches(BranchesScreen::new(config)),
            WizardStep::Commits => ActiveScreen::Commits(CommitsScreen::new(config)),
            WizardStep::Naming => ActiveScreen::Naming(NamingScreen::new(config)),
            WizardStep::Ai => ActiveScreen::Ai(AiScreen::new(config)),
            WizardStep::Summary => ActiveScreen::Summary(SummaryScreen::new(config)),
            WizardStep::Complete => return None,
        };
        Some(screen)
    }

    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Welcome(s) => s,
            ActiveScreen::GitInit(s) => s,
            ActiveScreen::GitHub(s) => s,
            ActiveScreen::Branches(s) => s,
            ActiveScreen::Commits(s) => s,
            ActiveScreen::Naming(s) => s,
            ActiveScreen::Ai(s) => s,
            ActiveScreen::Summary(s) => s,
            ActiveScreen::Complete(s) => s,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Welcome(s) => s,
            ActiveScreen::GitInit(s) => s,
            ActiveScreen::GitHub(s) => s,
            ActiveScreen::Branches(s) => s,
            ActiveScreen::Commits(s) => s,
            ActiveScreen::Naming(s) => s,
            ActiveScreen::Ai(s) => s,
            ActiveScreen::Summary(s) => s,
            ActiveScreen::Complete(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeGit;
    use super::*;

    #[test]
    fn test_build_matches_step() {
        let config = Config::default();
        let git = FakeGit::new(true);
        for step in WizardStep::ALL {
            match ActiveScreen::build(step, &config, &git) {
                Some(screen) => assert_eq!(screen.as_screen().step(), step),
                None => assert_eq!(step, WizardStep::Complete),
            }
        }
    }
}
