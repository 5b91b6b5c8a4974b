use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::wezterm::DEFAULT_PROGRAM;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "wezterm_mcp=info";

/// Optional settings file, loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to the `wezterm` executable.
    pub wezterm: Option<PathBuf>,
    /// Tracing filter directive, e.g. `wezterm_mcp=debug`.
    pub log_filter: Option<String>,
    /// HTTP transport section.
    pub http: Option<HttpConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    pub bind: Option<SocketAddr>,
}

impl Config {
    /// Load config from a TOML file path. Returns None if file doesn't exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))?;
        Ok(Some(config))
    }

    /// `<config dir>/wezterm-mcp/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wezterm-mcp").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path)?
                .ok_or_else(|| ConfigError::NotFound(path.to_path_buf())),
            None => match Self::default_path() {
                Some(path) => Ok(Self::load(&path)?.unwrap_or_default()),
                None => Ok(Self::default()),
            },
        }
    }

    /// The `wezterm` executable: CLI override, then config, then `PATH`.
    pub fn wezterm_program(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.wezterm.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM))
    }

    /// HTTP bind address: CLI override, then config, then the default.
    pub fn http_bind(&self, cli: Option<SocketAddr>) -> SocketAddr {
        cli.or_else(|| self.http.as_ref().and_then(|h| h.bind))
            .unwrap_or_else(default_http_bind)
    }

    /// Tracing filter: `RUST_LOG` wins, then config, then the default.
    pub fn log_filter(&self, rust_log: Option<String>) -> String {
        rust_log
            .or_else(|| self.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

/// Default bind address for the HTTP transport.
fn default_http_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8765))
}

/// Errors that can occur when loading config.
#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    ReadFailed(PathBuf, std::io::Error),
    ParseFailed(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::ReadFailed(path, e) => {
                write!(f, "Failed to read config {}: {}", path.display(), e)
            }
            Self::ParseFailed(path, e) => {
                write!(f, "Failed to parse config {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
