//! Logging init: the subscriber is built from an explicit `LogConfig`
//! handed over by the caller; nothing here reads ambient settings.

use crate::config::ConfigError;
use std::io;
use std::str::FromStr;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    #[default]
    Stderr,
    Stdout,
}

impl FromStr for LogTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stderr" => Ok(LogTarget::Stderr),
            "stdout" => Ok(LogTarget::Stdout),
            other => Err(ConfigError::LogTarget(other.to_string())),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Console,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::LogFormat(other.to_string())),
        }
    }
}

/// Complete logging configuration; `init` consumes exactly this value.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level or filter directives understood by `EnvFilter` (e.g. "debug",
    /// "mvnscout_core=trace").
    pub level: String,
    pub target: LogTarget,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            target: LogTarget::default(),
            format: LogFormat::default(),
        }
    }
}

fn level_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(level).map_err(|source| ConfigError::LogLevel {
        value: level.to_string(),
        source,
    })
}

/// Install the global subscriber described by `cfg`.
///
/// Fails with `ConfigError::LogLevel` when the level text does not parse,
/// before any network activity has happened.
pub fn init(cfg: &LogConfig) -> Result<(), ConfigError> {
    let filter = level_filter(&cfg.level)?;

    let writer = match cfg.target {
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        LogTarget::Stdout => BoxMakeWriter::new(io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    match cfg.format {
        LogFormat::Console => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}
