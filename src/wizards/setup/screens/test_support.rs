//! Fakes shared by screen and wizard tests

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::{Config, ConfigStore, SaveError};
use crate::git::GitBackend;
use crate::input::Key;

use super::super::screen::Screen;

/// Type `text` into the focused field one key at a time
pub fn type_text(screen: &mut dyn Screen, text: &str) {
    for c in text.chars() {
        if let Some(key) = Key::from_char(c) {
            screen.update(key);
        }
    }
}

/// In-memory git backend
#[derive(Debug, Default)]
pub struct FakeGit {
    is_repo: Cell<bool>,
    has_origin: bool,
    init_error: Option<String>,
    pub init_calls: Rc<Cell<usize>>,
}

impl FakeGit {
    pub fn new(is_repo: bool) -> Self {
        Self {
            is_repo: Cell::new(is_repo),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self) -> Self {
        self.has_origin = true;
        self
    }

    pub fn failing_init(mut self, message: &str) -> Self {
        self.init_error = Some(message.to_string());
        self
    }
}

impl GitBackend for FakeGit {
    fn is_git_repo(&self, _path: &Path) -> bool {
        self.is_repo.get()
    }

    fn init_repository(&self, _path: &Path, _default_branch: &str) -> anyhow::Result<()> {
        self.init_calls.set(self.init_calls.get() + 1);
        if let Some(message) = &self.init_error {
            anyhow::bail!("{}", message);
        }
        self.is_repo.set(true);
        Ok(())
    }

    fn has_origin_remote(&self, _path: &Path) -> bool {
        self.has_origin
    }
}

/// Config store that records saved configurations
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub saved: Rc<RefCell<Vec<Config>>>,
    fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ConfigStore for MemoryStore {
    fn save(&self, config: &Config) -> Result<(), SaveError> {
        if self.fail {
            return Err(SaveError::Io {
                path: self.location(),
                kind: crate::config::DiskErrorKind::PermissionDenied,
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.saved.borrow_mut().push(config.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("/tmp/gitwise-test/config.toml")
    }
}
