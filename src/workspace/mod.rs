mod config;

pub use config::{
    config_path_in, load_from, workspace_root, write_to, AppConfig, DatasetSettings,
    LoggingSettings, StoreSettings, HOME_ENV_VAR,
};

use crate::datasets::{discover_datasets, DatasetSource, ProfileDataset};
use crate::representatives::{CsvFileBackend, ProfileStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved workspace: root directory plus the loaded configuration.
pub struct Workspace {
    pub config: AppConfig,
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl Workspace {
    /// Resolves the root, makes sure it exists and loads `config.toml`.
    pub fn new() -> Result<Self> {
        let root = workspace_root()?;
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create workspace root {}", root.display()))?;
        let config_path = config_path_in(&root);
        let config = load_from(&config_path)?;
        Ok(Self {
            config,
            root,
            config_path,
        })
    }

    /// Builds a workspace over an explicit root and config, bypassing env lookup.
    pub fn with_config(root: impl Into<PathBuf>, config: AppConfig) -> Self {
        let root = root.into();
        let config_path = config_path_in(&root);
        Self {
            config,
            root,
            config_path,
        }
    }

    /// Writes the current configuration to `config.toml` unless one exists.
    /// Returns whether a file was written.
    pub fn init_config(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }
        write_to(&self.config_path, &self.config)?;
        tracing::info!(path = %self.config_path.display(), "wrote default configuration");
        Ok(true)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.resolve(&self.config.store.file)
    }

    pub fn datasets_dir(&self) -> PathBuf {
        self.resolve(&self.config.datasets.directory)
    }

    /// Opens the durable representative store configured for this workspace.
    pub fn open_store(&self) -> Result<ProfileStore<CsvFileBackend>> {
        ProfileStore::with_capacity(
            CsvFileBackend::new(self.store_path()),
            self.config.store.max_per_domain,
        )
    }

    /// Lists the source groups found in the datasets directory.
    pub fn dataset_sources(&self) -> Result<Vec<DatasetSource>> {
        discover_datasets(&self.datasets_dir(), &self.config.datasets.file_prefix)
    }

    /// Loads the dataset of one source group.
    pub fn load_dataset(&self, group: &str) -> Result<ProfileDataset> {
        let source = self
            .dataset_sources()?
            .into_iter()
            .find(|source| source.group == group)
            .with_context(|| {
                format!(
                    "No dataset for group '{group}' in {}",
                    self.datasets_dir().display()
                )
            })?;
        ProfileDataset::from_csv_path(&source.group, &source.path)
    }
}
