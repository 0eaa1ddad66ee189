#![deny(missing_docs)]
//! Shared logging utilities for the pickr workspace.
//!
//! This crate provides the `pickr_*` logging macros used by the feed and
//! detail paths, the logger setup used by the command-line driver, and a
//! minimal test initializer for the global logger. Callers of the macros must
//! depend on the `log` crate, which the macros expand to.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! pickr_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! pickr_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! pickr_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! pickr_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! pickr_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file only.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    #[default]
    Terminal,
    /// Write to both the log file and the terminal.
    Both,
}

/// Logger setup for a process.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Maximum level that reaches any sink.
    pub level: LevelFilter,
    /// Where log records go.
    pub destination: LogDestination,
    /// File written by [`LogDestination::File`] and [`LogDestination::Both`].
    pub file_path: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            destination: LogDestination::Terminal,
            file_path: PathBuf::from("./pickr.log"),
        }
    }
}

/// Installs the global logger described by `settings`.
///
/// A file that cannot be created is reported on stderr and skipped; the
/// remaining sinks are still installed. Calling this twice is a no-op.
pub fn initialize(settings: &LogSettings) {
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            settings.level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        match File::create(&settings.file_path) {
            Ok(file) => loggers.push(WriteLogger::new(settings.level, config, file)),
            Err(err) => eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                settings.file_path, err
            ),
        }
    }

    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
