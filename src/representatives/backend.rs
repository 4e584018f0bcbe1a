use super::entry::{RepresentativeEntry, STORE_COLUMNS};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a [`super::ProfileStore`] keeps its collection.
///
/// `save` always receives the complete collection; implementations replace
/// whatever they held before.
pub trait StoreBackend {
    fn load(&self) -> Result<Vec<RepresentativeEntry>>;
    fn save(&self, entries: &[RepresentativeEntry]) -> Result<()>;
}

/// Flat CSV file rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct CsvFileBackend {
    path: PathBuf,
}

impl CsvFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for CsvFileBackend {
    fn load(&self) -> Result<Vec<RepresentativeEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Unable to read {:?}", self.path))?;
        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let entry: RepresentativeEntry = row.with_context(|| {
                format!("Failed to parse representative record in {:?}", self.path)
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    fn save(&self, entries: &[RepresentativeEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open {:?} for writing", self.path))?;
        writer.write_record(STORE_COLUMNS)?;
        for entry in entries {
            writer.write_record(entry.to_row())?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to persist {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory collection, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<Vec<RepresentativeEntry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<RepresentativeEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<RepresentativeEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[RepresentativeEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
