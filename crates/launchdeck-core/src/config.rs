//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/launchdeck/config.toml)
//! 3. Environment variables (LAUNCHDECK_* prefix)
//!
//! Environment variables take precedence over config file values. The
//! defaults reproduce the fixed paths and port the service originally ran
//! with (`/data/links.json` on port 8080), so a bare deployment needs no
//! configuration at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

/// Environment variable prefix
const ENV_PREFIX: &str = "LAUNCHDECK";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the link collection file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the collection file inside `data_dir`
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Front-end entry file served for every non-API path
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            data_file: default_data_file(),
            bind_addr: default_bind_addr(),
            index_file: default_index_file(),
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (LAUNCHDECK_DATA_DIR, LAUNCHDECK_BIND_ADDR,
    ///    LAUNCHDECK_INDEX_FILE)
    /// 2. Config file (~/.config/launchdeck/config.toml or LAUNCHDECK_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // LAUNCHDECK_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // LAUNCHDECK_BIND_ADDR
        if let Ok(val) = std::env::var(format!("{}_BIND_ADDR", ENV_PREFIX)) {
            match val.parse() {
                Ok(addr) => self.bind_addr = addr,
                Err(_) => warn!("Ignoring invalid {}_BIND_ADDR: {}", ENV_PREFIX, val),
            }
        }

        // LAUNCHDECK_INDEX_FILE
        if let Ok(val) = std::env::var(format!("{}_INDEX_FILE", ENV_PREFIX)) {
            self.index_file = PathBuf::from(val);
        }
    }

    /// Get the config file path
    ///
    /// Can be overridden with LAUNCHDECK_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("launchdeck")
            .join("config.toml")
    }

    /// Get the path to the link collection file
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

fn default_data_file() -> String {
    "links.json".to_string()
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_index_file() -> PathBuf {
    PathBuf::from("index.html")
}
