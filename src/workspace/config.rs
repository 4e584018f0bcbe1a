//! Configuration primitives for the Parcours workspace.
//!
//! Stored in a machine-readable TOML file located at:
//!   `$PARCOURS_HOME/config/config.toml` when the override is set
//!   `<OS data dir>/Parcours/config/config.toml` otherwise
//!
//! The config tracks where the representative store lives, how many
//! representatives each domain keeps, where the per-group profile datasets
//! are found and the default log level.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Representative store location and bound.
    #[serde(default)]
    pub store: StoreSettings,
    /// Where profile datasets are discovered.
    #[serde(default)]
    pub datasets: DatasetSettings,
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Representative store preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// File name (relative to the workspace root) or absolute path of the store.
    #[serde(default = "default_store_file")]
    pub file: PathBuf,
    /// Maximum number of representatives kept per domain.
    #[serde(default = "default_max_per_domain")]
    pub max_per_domain: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            file: default_store_file(),
            max_per_domain: default_max_per_domain(),
        }
    }
}

fn default_store_file() -> PathBuf {
    PathBuf::from("profils_representatifs.csv")
}

const fn default_max_per_domain() -> usize {
    3
}

/// Dataset discovery preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Directory holding one CSV per source group. Relative paths resolve
    /// against the workspace root.
    #[serde(default = "default_datasets_dir")]
    pub directory: PathBuf,
    /// File-name prefix preceding the group name, e.g. `profils-lycée-joliot.csv`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            directory: default_datasets_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_datasets_dir() -> PathBuf {
    PathBuf::from("datasets")
}

fn default_file_prefix() -> String {
    "profils-lycée-".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the workspace root.
pub const HOME_ENV_VAR: &str = "PARCOURS_HOME";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the root directory where Parcours stores data.
///
/// Order of precedence:
/// 1. `PARCOURS_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("Parcours"))
}

/// `<root>/config/config.toml`.
pub fn config_path_in(root: &Path) -> PathBuf {
    root.join("config").join(CONFIG_FILE_NAME)
}

/// Reads the config at `path`; an absent file means defaults.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))
}

/// Writes `config` to `path` as pretty TOML, creating parent directories.
pub fn write_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))
}
