// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging built on `tracing`.
//!
//! ```text
//! init_logging(&LogConfig)
//!   console_layer   stderr, ANSI, EnvFilter(console_level)
//!   file_layer      optional; non_blocking text or JSON, EnvFilter(file_level)
//!        |
//!        v
//!   registry().with(Vec<BoxedLayer>)
//!        |
//!        v
//!   LogGuard (flushes the file writer on drop)
//!
//! LogLevel  0 off   1 error   2 warn   3 info
//!           4 debug (git command lines)
//!           5 trace (process lifecycle)
//!           6 dump  (every line git prints)
//! ```
//!
//! stdout is reserved for command output, so the console layer always
//! writes to stderr.

use std::path::Path;

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity from 0 (silent) to 6 (dump).
///
/// Stored in config files and on the command line as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// Validates `level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= Self::DUMP.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Clamps any integer into the 0-6 range.
    #[must_use]
    pub fn from_int(level: i32) -> Self {
        u8::try_from(level.clamp(0, i32::from(Self::DUMP.0))).map_or(Self::SILENT, Self)
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Most verbose `tracing` level this setting lets through.
    #[must_use]
    pub const fn to_tracing_level(self) -> Option<Level> {
        match self.0 {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    /// `EnvFilter` directive for this level.
    ///
    /// Lines read from a child process are traced under
    /// `gitscope::core::process::io`; level 5 caps that target at debug so
    /// only DUMP shows them.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            5 => "trace,gitscope::core::process::io=debug",
            _ => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Settings handed to [`init_logging`].
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    /// Write the file log as JSON lines instead of text.
    #[builder(setters(name = with_json_file), default = false)]
    json_file: bool,
    /// Print the module path next to console messages.
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Level for the stderr layer.
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    /// Level for the file layer; ignored without a log file.
    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    /// Path of the log file, if file logging is on.
    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn json_file(&self) -> bool {
        self.json_file
    }

    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Keeps the non-blocking file writer alive; pending lines are flushed on
/// drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn console_layer(config: &LogConfig) -> BoxedLayer {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_level(true)
        .with_ansi(true)
        .with_filter(EnvFilter::new(config.console_level().to_filter_string()))
        .boxed()
}

/// Opens `log_path` (creating its directory) and builds the file layer.
fn file_layer(config: &LogConfig, log_path: &Path) -> Result<(BoxedLayer, WorkerGuard)> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::File::create(log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::new(config.file_level().to_filter_string());

    let layer = if config.json_file() {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter)
            .boxed()
    };
    Ok((layer, guard))
}

/// Installs the global subscriber.
///
/// The returned guard must live until the program exits.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use gitscope::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_file_level(LogLevel::DUMP)
///     .with_log_file("gitscope.log".to_string())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("logging ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers = vec![console_layer(config)];
    let mut file_guard = None;

    if let Some(log_path) = config.log_file() {
        let (layer, guard) = file_layer(config, Path::new(log_path))?;
        layers.push(layer);
        file_guard = Some(guard);
    }

    tracing_subscriber::registry().with(layers).init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
