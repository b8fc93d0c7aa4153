//! Shared utilities for quartermaster CLI binaries.
//!
//! This crate provides the plumbing common to the `qm-bucket` and
//! `qm-queue` binaries: the log-level flag type, logging initialization,
//! and byte formatting for log output.

use anyhow::Result;
use clap::ValueEnum;
use tracing::Level;

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Initialize logging with the specified level.
///
/// Logs are written to stderr so stdout remains clean for tool output.
pub fn init_logging(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Format bytes as a human-readable string.
///
/// # Examples
///
/// ```
/// use qm_cli_common::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 bytes");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (1 << 40, "TB"),
        (1 << 30, "GB"),
        (1 << 20, "MB"),
        (1 << 10, "KB"),
    ];

    for (scale, unit) in UNITS {
        if bytes >= scale {
            return format!("{:.2} {}", bytes as f64 / scale as f64, unit);
        }
    }

    format!("{} bytes", bytes)
}
