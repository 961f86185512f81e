//! Logging configuration using the tracing framework
//!
//! Logs are controlled via the RUST_LOG environment variable.
//! The interactive UI owns the terminal, so it logs to a rolling file only;
//! the plain CLI commands log to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "futsalku=info,warn";

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("futsalku=debug,warn");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging to stderr
///
/// # Environment Variables
///
/// - `RUST_LOG`: Controls log level (e.g., "debug", "info", "warn", "error")
///   - Default: "futsalku=info,warn"
///   - `RUST_LOG=futsalku::navigation=debug` logs every screen transition
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .with_file(false),
        )
        .init();
}

/// Initialize logging to a daily rolling file in the platform data directory
///
/// Nothing is written to stdout or stderr, so the terminal UI stays intact.
pub fn init_with_file(
    log_file_name: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let log_dir =
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "futsalku", "futsalku") {
            let log_path = proj_dirs.data_dir().join("logs");
            std::fs::create_dir_all(&log_path)?;
            log_path
        } else {
            std::env::current_dir()?
        };

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_file_name);

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .try_init()?;

    Ok(())
}

/// Initialize logging for tests
///
/// Only errors are shown by default.
pub fn init_test() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init()
        .ok(); // Ignore errors if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
    }

    #[test]
    fn test_structured_logging() {
        init_test();
        tracing::info!(screen = "home", venue_id = 3, "Structured log message");
    }
}
