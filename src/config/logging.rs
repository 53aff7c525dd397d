//! Logging configuration and initialization.
//!
//! The logging context is constructed explicitly: `main` builds a
//! [`LoggingConfig`], calls [`LoggingConfig::init`], and holds the returned
//! guard for the life of the process. Console output carries INFO and above
//! (overridable through `RUST_LOG`); the rolling log file keeps everything
//! down to DEBUG, rotating daily with a bounded number of retained files.

use std::env;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::error::ConfigError;

/// Environment variable overriding the log directory.
pub const LOG_DIR_VAR: &str = "ORDERCAST_LOG_DIR";

/// Environment variable overriding the console log level.
pub const LOG_LEVEL_VAR: &str = "ORDERCAST_LOG_LEVEL";

const FILE_PREFIX: &str = "ordercast";
const FILE_SUFFIX: &str = "log";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Console log level (file output always carries DEBUG and above).
    pub level: String,
    /// Directory receiving the rolling log files.
    pub dir: PathBuf,
    /// Number of rotated log files to retain.
    pub max_files: usize,
}

impl LoggingConfig {
    /// Build a configuration from the environment, with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var(LOG_LEVEL_VAR).unwrap_or(defaults.level),
            dir: env::var(LOG_DIR_VAR).map_or(defaults.dir, PathBuf::from),
            max_files: defaults.max_files,
        }
    }

    /// Initialize the tracing subscriber with console and file output.
    ///
    /// The returned guard flushes the file writer on drop and must be held
    /// until the process exits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Logging`] when the log directory cannot be
    /// created or opened.
    pub fn init(&self) -> Result<WorkerGuard, ConfigError> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(FILE_PREFIX)
            .filename_suffix(FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.dir)
            .map_err(|e| ConfigError::Logging(e.to_string()))?;
        let (file_writer, guard) = tracing_appender::non_blocking(appender);

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_writer)
                    .with_filter(LevelFilter::DEBUG),
            )
            .init();

        Ok(guard)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            dir: PathBuf::from("logs"),
            max_files: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bounded() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.dir, PathBuf::from("logs"));
        assert!(config.max_files > 0);
    }

    #[test]
    fn init_creates_the_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".into(),
            dir: dir.path().join("logs"),
            max_files: 2,
        };

        // A second subscriber in the same process cannot become the global
        // default; only the appender setup is under test here.
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(FILE_PREFIX)
            .filename_suffix(FILE_SUFFIX)
            .max_log_files(config.max_files)
            .build(&config.dir);
        assert!(appender.is_ok());
        assert!(config.dir.is_dir());
    }
}
