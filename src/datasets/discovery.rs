use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A source group's dataset file, e.g. `profils-lycée-joliot.csv` → `joliot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    pub group: String,
    pub path: PathBuf,
}

/// Finds `<prefix><group>.csv` files directly inside `dir`, sorted by group.
pub fn discover_datasets(dir: &Path, prefix: &str) -> Result<Vec<DatasetSource>> {
    if !dir.exists() {
        bail!("Datasets directory {:?} does not exist", dir);
    }

    let mut sources: Vec<DatasetSource> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            let is_csv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
            if !is_csv {
                return None;
            }
            let group = path.file_stem()?.to_str()?.strip_prefix(prefix)?;
            if group.is_empty() {
                return None;
            }
            Some(DatasetSource {
                group: group.to_string(),
                path: path.to_path_buf(),
            })
        })
        .collect();
    sources.sort_by(|a, b| a.group.cmp(&b.group));
    tracing::debug!(dir = %dir.display(), count = sources.len(), "discovered datasets");
    Ok(sources)
}
