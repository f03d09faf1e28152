use anyhow::Result;

use gitwise::app::{App, SetupOutcome};
use gitwise::config::{self, Config};
use gitwise::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    // Initialize file logging BEFORE any tracing calls
    let (log_file_info, _guard) = logging::init_file_logging(config::logs_dir())?;

    // Clean up old logs (7-day retention)
    if let Ok(count) = logging::cleanup_old_logs(&config::logs_dir()) {
        if count > 0 {
            tracing::info!("Cleaned up {} old log files", count);
        }
    }

    tracing::info!("Logging to: {}", log_file_info.path.display());

    let config = Config::load()?;
    let mut app = App::new(config, log_file_info)?;

    // The event loop is synchronous and blocks this task until the wizard ends
    match app.run()? {
        SetupOutcome::Saved(path) => println!("Configuration saved to {}", path.display()),
        SetupOutcome::SaveFailed(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
        SetupOutcome::Cancelled => println!("Setup cancelled, nothing was saved"),
    }
    Ok(())
}
