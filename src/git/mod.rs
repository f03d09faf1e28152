//! Git operations used by the setup wizard
//!
//! The wizard only needs three questions answered by git: is this a repository, can
//! one be created here, and is there an `origin` remote. They sit behind the
//! [`GitBackend`] trait so screens can be exercised without touching disk.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::Path;

/// Git collaborator consumed by the wizard
pub trait GitBackend {
    /// Whether `path` is inside a git repository
    fn is_git_repo(&self, path: &Path) -> bool;

    /// Initialize a repository at `path`, blocking until done
    fn init_repository(&self, path: &Path, default_branch: &str) -> Result<()>;

    /// Whether the repository containing `path` has a remote named `origin`
    fn has_origin_remote(&self, path: &Path) -> bool;
}

/// [`GitBackend`] implemented with libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Backend;

impl GitBackend for Git2Backend {
    fn is_git_repo(&self, path: &Path) -> bool {
        is_git_repository(path)
    }

    fn init_repository(&self, path: &Path, default_branch: &str) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;

        let mut opts = git2::RepositoryInitOptions::new();
        if !default_branch.is_empty() {
            opts.initial_head(default_branch);
        }
        Repository::init_opts(path, &opts)
            .with_context(|| format!("Failed to initialize git repository at {:?}", path))?;

        tracing::info!("Initialized git repository at {:?}", path);
        Ok(())
    }

    fn has_origin_remote(&self, path: &Path) -> bool {
        Repository::discover(path)
            .map(|repo| repo.find_remote("origin").is_ok())
            .unwrap_or(false)
    }
}

/// Check if a path is inside a git repository
pub fn is_git_repository(path: &Path) -> bool {
    Repository::discover(path).is_ok()
}

/// Validates a branch name according to git rules (git check-ref-format).
///
/// Returns `Ok(())` if the name is valid, or `Err(message)` with a specific error.
///
/// Git branch names cannot:
/// - Be empty
/// - Contain spaces, `~`, `^`, `:`, `?`, `*`, `[`, `\`, or control characters
/// - Begin or end with `/` or `.`, or have a path component beginning with `.`
/// - Begin with `-` or be exactly `@`
/// - Contain `..`, `@{`, or consecutive slashes `//`
/// - End with `.lock`
pub fn validate_branch_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Branch name cannot be empty".to_string());
    }

    for c in name.chars() {
        if INVALID_BRANCH_CHARS.contains(&c) {
            return Err(format!("Branch name cannot contain '{}'", c));
        }
        if c.is_ascii_control() {
            return Err("Branch name cannot contain control characters".to_string());
        }
    }

    if name.starts_with('/') || name.ends_with('/') {
        return Err("Branch name cannot start or end with '/'".to_string());
    }
    if name.ends_with('.') {
        return Err("Branch name cannot end with '.'".to_string());
    }
    if name.split('/').any(|component| component.starts_with('.')) {
        return Err("Branch name components cannot start with '.'".to_string());
    }
    if name.starts_with('-') {
        return Err("Branch name cannot start with '-'".to_string());
    }
    if name == "@" {
        return Err("Branch name cannot be '@'".to_string());
    }
    if name.contains("//") {
        return Err("Branch name cannot contain consecutive slashes '//'".to_string());
    }
    if name.contains("..") {
        return Err("Branch name cannot contain '..'".to_string());
    }
    if name.contains("@{") {
        return Err("Branch name cannot contain '@{'".to_string());
    }
    if name.ends_with(".lock") {
        return Err("Branch name cannot end with '.lock'".to_string());
    }

    Ok(())
}

/// Characters that are invalid in git branch names
pub const INVALID_BRANCH_CHARS: &[char] = &[' ', '~', '^', ':', '?', '*', '[', '\\'];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_git_repository() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_git_repository(temp_dir.path()));

        Repository::init(temp_dir.path()).unwrap();
        assert!(is_git_repository(temp_dir.path()));

        // Discovery works from subdirectories too
        let subdir = temp_dir.path().join("subdir");
        std::fs::create_dir(&subdir).unwrap();
        assert!(is_git_repository(&subdir));
    }

    #[test]
    fn test_init_repository_creates_repo_with_head() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project");
        let backend = Git2Backend;

        backend.init_repository(&path, "trunk").unwrap();

        assert!(backend.is_git_repo(&path));
        let repo = Repository::open(&path).unwrap();
        let head = repo.find_reference("HEAD").unwrap();
        assert_eq!(head.symbolic_target(), Some("refs/heads/trunk"));
    }

    #[test]
    fn test_has_origin_remote() {
        let temp_dir = TempDir::new().unwrap();
        let backend = Git2Backend;
        assert!(!backend.has_origin_remote(temp_dir.path()));

        let repo = Repository::init(temp_dir.path()).unwrap();
        assert!(!backend.has_origin_remote(temp_dir.path()));

        repo.remote("origin", "https://github.com/example/repo.git")
            .unwrap();
        assert!(backend.has_origin_remote(temp_dir.path()));
    }

    #[test]
    fn test_validate_branch_name_valid() {
        assert!(validate_branch_name("main").is_ok());
        assert!(validate_branch_name("feature/login").is_ok());
        assert!(validate_branch_name("release-1.2").is_ok());
    }

    #[test]
    fn test_validate_branch_name_invalid() {
        assert!(validate_branch_name("").is_err());
        assert!(validate_branch_name("has space").is_err());
        assert!(validate_branch_name("/leading").is_err());
        assert!(validate_branch_name("trailing.").is_err());
        assert!(validate_branch_name("a//b").is_err());
        assert!(validate_branch_name("a..b").is_err());
        assert!(validate_branch_name("a@{b").is_err());
        assert!(validate_branch_name("branch.lock").is_err());
        assert_eq!(
            validate_branch_name("what?").unwrap_err(),
            "Branch name cannot contain '?'"
        );
    }

    #[test]
    fn test_validate_branch_name_matches_check_ref_format() {
        assert_eq!(
            validate_branch_name(".hidden").unwrap_err(),
            "Branch name components cannot start with '.'"
        );
        assert!(validate_branch_name("feat/.x").is_err());
        assert!(validate_branch_name("-topic").is_err());
        assert!(validate_branch_name("@").is_err());

        assert!(validate_branch_name("feat/x.y").is_ok());
        assert!(validate_branch_name("topic-").is_ok());
        assert!(validate_branch_name("user@host").is_ok());
    }
}
