//! Wizard step definitions

/// One step of the setup wizard, in wizard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Welcome,
    GitInit,
    GitHubSetup,
    Branches,
    Commits,
    Naming,
    Ai,
    Summary,
    Complete,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 9] = [
        WizardStep::Welcome,
        WizardStep::GitInit,
        WizardStep::GitHubSetup,
        WizardStep::Branches,
        WizardStep::Commits,
        WizardStep::Naming,
        WizardStep::Ai,
        WizardStep::Summary,
        WizardStep::Complete,
    ];

    /// Number of steps
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position in the wizard
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::GitInit => 1,
            WizardStep::GitHubSetup => 2,
            WizardStep::Branches => 3,
            WizardStep::Commits => 4,
            WizardStep::Naming => 5,
            WizardStep::Ai => 6,
            WizardStep::Summary => 7,
            WizardStep::Complete => 8,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The step after this one
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The step before this one (the target of a backward transition)
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    /// Title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Welcome => "Welcome",
            WizardStep::GitInit => "Repository",
            WizardStep::GitHubSetup => "GitHub",
            WizardStep::Branches => "Branches",
            WizardStep::Commits => "Commit Conventions",
            WizardStep::Naming => "Branch Naming",
            WizardStep::Ai => "AI Provider",
            WizardStep::Summary => "Summary",
            WizardStep::Complete => "Complete",
        }
    }
}
