//! File-based logging with tracing integration

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::{DEFAULT_LOG_FILTER, LOG_FILE_PREFIX};

/// Information about the current log file
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    /// Full path to the log file
    pub path: PathBuf,
}

/// Generate a timestamped log file path
pub fn create_log_file_path(logs_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    logs_dir.join(format!("{}{}.log", LOG_FILE_PREFIX, timestamp))
}

/// A writer that appends to the shared log file
struct FileWriter {
    file: Arc<Mutex<File>>,
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut file) = self.file.lock() {
            file.write_all(buf)?;
            file.flush()?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Writer factory for tracing-subscriber
struct FileWriterMaker {
    file: Arc<Mutex<File>>,
}

impl<'a> MakeWriter<'a> for FileWriterMaker {
    type Writer = FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriter {
            file: Arc::clone(&self.file),
        }
    }
}

/// Guard that keeps the logging system alive
pub struct LoggingGuard {
    _file: Arc<Mutex<File>>,
}

/// `RUST_LOG` if set, otherwise [`DEFAULT_LOG_FILTER`]
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Open (creating if needed) a fresh log file in `logs_dir`
fn open_log_file(logs_dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(logs_dir).context("Failed to create logs directory")?;
    let log_path = create_log_file_path(logs_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    Ok((log_path, file))
}

/// Initialize file logging
///
/// Returns the log file info and a guard that must be kept alive for the duration of logging.
pub fn init_file_logging(logs_dir: PathBuf) -> Result<(LogFileInfo, LoggingGuard)> {
    let (log_path, file) = open_log_file(&logs_dir)?;
    let file = Arc::new(Mutex::new(file));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(FileWriterMaker {
            file: Arc::clone(&file),
        })
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok((LogFileInfo { path: log_path }, LoggingGuard { _file: file }))
}
