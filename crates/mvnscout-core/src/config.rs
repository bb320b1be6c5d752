use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Repository queried when neither the CLI nor the config file names one.
pub const DEFAULT_REPO_URL: &str = "https://repo.maven.apache.org/maven2";

/// Invalid logging input, reported before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("log level {value:?} is not valid")]
    LogLevel {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("log target {0:?} is not valid (expected \"stderr\" or \"stdout\")")]
    LogTarget(String),
    #[error("log format {0:?} is not valid (expected \"console\" or \"json\")")]
    LogFormat(String),
}

/// Global configuration loaded from `~/.config/mvnscout/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Repository analyzed when `--repo` is not given.
    pub repo_url: String,
    /// Seconds allowed for the TCP/TLS connect of each request.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for each whole request (probe or catalog fetch).
    pub request_timeout_secs: u64,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 120,
        }
    }
}

impl ScoutConfig {
    /// Transport deadlines for probe and fetch requests.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Deadlines applied to each curl handle. The core enforces no deadline of
/// its own beyond these.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        ScoutConfig::default().fetch_options()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mvnscout")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScoutConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScoutConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScoutConfig = toml::from_str(&data)?;
    Ok(cfg)
}
