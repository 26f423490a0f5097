//! Logging setup for the customizer
//!
//! The library only talks to the `log` facade. The embedding process calls
//! [`init`] once at startup to route records to stderr or to the mod's log file.

use std::fs::{self, OpenOptions};
use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LoggingConfig;

pub use log::{debug, info, warn, error, trace};

/// Prefix written in front of every record
pub const LOG_PREFIX: &str = "[ship_customization]";

/// Verbosity of the customizer log, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum LoggingLevel {
    /// Everything, including per-part traces
    Debug,
    /// Startup banner and per-ship summaries
    #[default]
    Info,
    /// Unknown operators, values and missing assets
    Warning,
    /// Failed directives and failed ships only
    Error,
    /// Silence
    NoLog,
}

impl LoggingLevel {
    /// The `log` filter matching this level
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::Debug,
            Self::Info => LevelFilter::Info,
            Self::Warning => LevelFilter::Warn,
            Self::Error => LevelFilter::Error,
            Self::NoLog => LevelFilter::Off,
        }
    }
}

/// Logging initialization errors
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The log file could not be opened
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A logger was already installed in this process
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Build a logger for the given configuration without installing it
pub fn builder(config: &LoggingConfig) -> Result<Builder, LoggingError> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.level.level_filter())
        .format(|buf, record| {
            writeln!(buf, "{} [{}] {}", LOG_PREFIX, record.level(), record.args())
        });

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    Ok(builder)
}

/// Initialize the logging system
///
/// Call once per process. A second call returns
/// [`LoggingError::AlreadyInitialized`] instead of replacing the logger.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    builder(config)?.try_init()?;
    Ok(())
}
