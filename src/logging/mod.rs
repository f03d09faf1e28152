//! Logging for gitwise
//!
//! The wizard owns the terminal, so logs go to a timestamped file under
//! `~/.gitwise/logs` and old files are pruned on startup.

mod file_writer;
mod retention;

pub use file_writer::{init_file_logging, LogFileInfo, LoggingGuard};
pub use retention::{cleanup_old_logs, cleanup_old_logs_with_retention, DEFAULT_RETENTION_DAYS};

/// File name prefix shared by every log file
pub const LOG_FILE_PREFIX: &str = "gitwise-";

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "gitwise=info";

/// Whether `name` is a log file written by gitwise
pub fn is_log_file_name(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
}
