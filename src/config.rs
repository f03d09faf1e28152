//! Configuration management for gitwise
//!
//! The wizard fills a [`Config`]; persistence goes through the [`ConfigStore`] trait so
//! the wizard never touches the filesystem directly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How `git pull` integrates upstream changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullStrategy {
    #[default]
    Merge,
    Rebase,
    FfOnly,
}

impl PullStrategy {
    pub const ALL: [PullStrategy; 3] = [PullStrategy::Merge, PullStrategy::Rebase, PullStrategy::FfOnly];

    pub fn label(&self) -> &'static str {
        match self {
            PullStrategy::Merge => "merge",
            PullStrategy::Rebase => "rebase",
            PullStrategy::FfOnly => "ff-only",
        }
    }
}

/// Commit message convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitConvention {
    #[default]
    Conventional,
    Angular,
    Gitmoji,
    Custom,
}

impl CommitConvention {
    pub const ALL: [CommitConvention; 4] = [
        CommitConvention::Conventional,
        CommitConvention::Angular,
        CommitConvention::Gitmoji,
        CommitConvention::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommitConvention::Conventional => "Conventional",
            CommitConvention::Angular => "Angular",
            CommitConvention::Gitmoji => "Gitmoji",
            CommitConvention::Custom => "Custom",
        }
    }

    /// Whether messages in this convention carry a `{type}` token
    pub fn uses_types(&self) -> bool {
        !matches!(self, CommitConvention::Gitmoji)
    }
}

/// AI provider used for commit message generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Cerebras,
    OpenAi,
    Anthropic,
    Groq,
}

impl AiProvider {
    pub const ALL: [AiProvider; 4] = [
        AiProvider::Cerebras,
        AiProvider::OpenAi,
        AiProvider::Anthropic,
        AiProvider::Groq,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AiProvider::Cerebras => "Cerebras",
            AiProvider::OpenAi => "OpenAI",
            AiProvider::Anthropic => "Anthropic",
            AiProvider::Groq => "Groq",
        }
    }

    /// Model used when the user leaves the model field empty
    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::Cerebras => "llama3.1-8b",
            AiProvider::OpenAi => "gpt-4o-mini",
            AiProvider::Anthropic => "claude-3-5-haiku-latest",
            AiProvider::Groq => "llama-3.1-8b-instant",
        }
    }
}

/// Subscription tier of the AI provider account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiPlan {
    #[default]
    Free,
    Pro,
}

impl AiPlan {
    pub const ALL: [AiPlan; 2] = [AiPlan::Free, AiPlan::Pro];

    pub fn label(&self) -> &'static str {
        match self {
            AiPlan::Free => "Free",
            AiPlan::Pro => "Pro",
        }
    }
}

/// Repository and branch behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Repository the configuration applies to
    pub repo_path: String,
    /// Branch created on init and used as the integration branch
    pub default_branch: String,
    pub pull_strategy: PullStrategy,
    /// Branches that must never be force-pushed or deleted
    pub protected_branches: Vec<String>,
    /// Delete local branches once merged
    pub delete_merged_branches: bool,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            repo_path: ".".to_string(),
            default_branch: "main".to_string(),
            pull_strategy: PullStrategy::default(),
            protected_branches: vec!["main".to_string()],
            delete_merged_branches: false,
        }
    }
}

/// GitHub integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
    pub enabled: bool,
    pub username: String,
    pub token: String,
    /// Remote that points at GitHub
    pub remote: String,
    pub create_pull_requests: bool,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            username: String::new(),
            token: String::new(),
            remote: "origin".to_string(),
            create_pull_requests: true,
        }
    }
}

/// Commit message rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitSettings {
    pub convention: CommitConvention,
    /// Allowed commit types (`feat`, `fix`, ...)
    pub types: Vec<String>,
    pub require_scope: bool,
    pub include_body: bool,
    /// Template for the custom convention
    pub template: String,
}

impl Default for CommitSettings {
    fn default() -> Self {
        Self {
            convention: CommitConvention::default(),
            types: ["feat", "fix", "docs", "refactor", "test", "chore"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            require_scope: false,
            include_body: false,
            template: String::new(),
        }
    }
}

/// Branch naming rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    pub enforce: bool,
    /// Branch name template (`{prefix}/{description}`, ...)
    pub pattern: String,
    /// Allowed branch prefixes
    pub prefixes: Vec<String>,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            enforce: true,
            pattern: crate::preview::DEFAULT_BRANCH_PATTERN.to_string(),
            prefixes: ["feature", "bugfix", "hotfix"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// AI provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub provider: AiProvider,
    pub plan: AiPlan,
    pub api_key: String,
    /// Model name; empty means the provider default
    pub model: String,
    pub generate_commit_messages: bool,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            plan: AiPlan::default(),
            api_key: String::new(),
            model: String::new(),
            generate_commit_messages: true,
        }
    }
}

impl AiSettings {
    /// The configured model, or the provider default when unset
    pub fn effective_model(&self) -> &str {
        if self.model.trim().is_empty() {
            self.provider.default_model()
        } else {
            &self.model
        }
    }
}

/// Application configuration collected by the setup wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub git: GitSettings,
    pub github: GitHubSettings,
    pub commits: CommitSettings,
    pub naming: NamingSettings,
    pub ai: AiSettings,
}

impl Config {
    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file, or return defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }
}

/// Categories of disk errors for user-friendly messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskErrorKind {
    /// Disk is full or quota exceeded
    DiskFull,
    /// Permission denied (read or write)
    PermissionDenied,
    /// File or directory not found
    NotFound,
    /// Other IO error
    Other,
}

impl DiskErrorKind {
    /// Get a user-friendly message for this error kind
    pub fn user_message(&self) -> &'static str {
        match self {
            DiskErrorKind::DiskFull => "disk full, free space needed to save",
            DiskErrorKind::PermissionDenied => "permission denied",
            DiskErrorKind::NotFound => "file or directory not found",
            DiskErrorKind::Other => "failed to write file",
        }
    }
}

/// Categorize an IO error into a user-friendly category
pub fn categorize_io_error(e: &std::io::Error) -> DiskErrorKind {
    use std::io::ErrorKind;

    match e.kind() {
        ErrorKind::WriteZero => DiskErrorKind::DiskFull,
        ErrorKind::PermissionDenied => DiskErrorKind::PermissionDenied,
        ErrorKind::NotFound => DiskErrorKind::NotFound,
        _ => {
            #[cfg(unix)]
            {
                if let Some(os_error) = e.raw_os_error() {
                    // ENOSPC = 28; EDQUOT = 122 on Linux, 69 on macOS
                    if os_error == 28 || os_error == 122 || os_error == 69 {
                        return DiskErrorKind::DiskFull;
                    }
                    // EACCES
                    if os_error == 13 {
                        return DiskErrorKind::PermissionDenied;
                    }
                }
            }
            DiskErrorKind::Other
        }
    }
}

/// Failure to persist the configuration
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to save {}: {}", .path.display(), .kind.user_message())]
    Io {
        path: PathBuf,
        kind: DiskErrorKind,
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SaveError::Io {
            path: path.to_path_buf(),
            kind: categorize_io_error(&source),
            source,
        }
    }
}

/// Persistence collaborator for the finished configuration
pub trait ConfigStore {
    /// Persist the configuration
    fn save(&self, config: &Config) -> Result<(), SaveError>;

    /// Where the configuration ends up, for display
    fn location(&self) -> PathBuf;
}

/// Stores the configuration as a TOML file
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new(config_file_path())
    }
}

impl ConfigStore for FileConfigStore {
    fn save(&self, config: &Config) -> Result<(), SaveError> {
        let content = toml::to_string_pretty(config)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SaveError::io(parent, e))?;
            }
        }
        std::fs::write(&self.path, content).map_err(|e| SaveError::io(&self.path, e))?;
        tracing::info!("Saved configuration to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Get the base configuration directory (~/.gitwise)
/// Falls back to ./.gitwise if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".gitwise")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gitwise"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure all required directories exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(config_dir()).context("Failed to create config directory")?;
    std::fs::create_dir_all(logs_dir()).context("Failed to create logs directory")?;
    Ok(())
}
