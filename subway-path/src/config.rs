//! Runtime configuration for the path query binary.

use std::path::PathBuf;

/// Environment variable naming the network description file.
pub const NETWORK_ENV: &str = "SUBWAY_NETWORK";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "SUBWAY_LOG";

/// Log filter used when neither `SUBWAY_LOG` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Error returned when the configuration is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No network file given on the command line or in the environment
    #[error("no network file: pass one as the first argument or set SUBWAY_NETWORK")]
    MissingNetwork,
}

/// Configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the network JSON file
    pub network_path: Option<PathBuf>,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    ///
    /// `SUBWAY_LOG` takes precedence over `RUST_LOG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let network_path = non_empty(NETWORK_ENV).map(PathBuf::from);
        let log_filter = non_empty(LOG_ENV)
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            network_path,
            log_filter,
        }
    }

    /// Set the network file path.
    pub fn with_network_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.network_path = Some(path.into());
        self
    }

    /// Set the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// The network file path, or an error if none was configured.
    pub fn require_network_path(&self) -> Result<&PathBuf, ConfigError> {
        self.network_path.as_ref().ok_or(ConfigError::MissingNetwork)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
