use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::RunMode;
use crate::error::{Result, SemverError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "semver-release.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver-release.toml";

/// Settings for a release computation.
///
/// Every field falls back to its default when absent from the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Pipeline context, e.g. "NATIVE_BRANCH_RPM"; unknown names fall back to NATIVE
    #[serde(default, deserialize_with = "deserialize_run_mode")]
    pub run_mode: RunMode,

    /// Branch qualifier used for branch builds
    #[serde(default)]
    pub branch_version: String,

    /// Free-form build metadata appended to the scm tag
    #[serde(default)]
    pub metadata: String,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SemverError::config(format!("Invalid configuration: {}", e)))
    }
}

fn deserialize_run_mode<'de, D>(deserializer: D) -> std::result::Result<RunMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|_| {
        warn!(run_mode = %raw, "unknown run mode, falling back to {}", RunMode::default());
        RunMode::default()
    }))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-release.toml` in current directory
/// 3. `.semver-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match discover_config_file() {
            Some(path) => path,
            None => {
                debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(&path).map_err(|e| {
        SemverError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    Config::from_toml(&content)
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
