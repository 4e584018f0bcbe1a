//! Per-source-group profile tables.
//!
//! A dataset is a table of named columns with one profile per row. Column
//! lookups never fail: an absent column behaves like a column of empty
//! cells, so filters on it match nothing and breakdowns are empty.

mod discovery;

pub use discovery::{discover_datasets, DatasetSource};

use crate::profiles::{is_valid, ProfileRecord};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ProfileDataset {
    source_group: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ProfileDataset {
    pub fn from_csv_path(source_group: &str, path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Unable to open dataset {}", path.display()))?;
        let dataset = Self::from_reader(source_group, file)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?;
        tracing::info!(
            group = source_group,
            rows = dataset.len(),
            path = %path.display(),
            "loaded profile dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(source_group: &str, reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader
            .headers()
            .context("Missing header row")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Malformed dataset row")?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self {
            source_group: source_group.to_string(),
            headers,
            rows,
        })
    }

    pub fn source_group(&self) -> &str {
        &self.source_group
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_exists(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    fn cell<'a>(&self, row: &'a [String], column: usize) -> Option<&'a str> {
        row.get(column).map(String::as_str).filter(|v| !v.is_empty())
    }

    fn valid_cells<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.column_index(column);
        self.rows.iter().filter_map(move |row| {
            let value = self.cell(row, index?)?;
            is_valid(Some(value)).then_some(value)
        })
    }

    /// Sorted distinct valid values of `column`.
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        self.valid_cells(column)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Occurrences of each valid value of `column`, most frequent first.
    pub fn value_counts(&self, column: &str) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in self.valid_cells(column) {
            *counts.entry(value).or_insert(0) += 1;
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect();
        // Stable sort keeps the alphabetical order among equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Rows whose `column` equals `value` exactly.
    pub fn filter_eq(&self, column: &str, value: &str) -> ProfileDataset {
        let rows = match self.column_index(column) {
            Some(index) => self
                .rows
                .iter()
                .filter(|row| self.cell(row, index) == Some(value))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        ProfileDataset {
            source_group: self.source_group.clone(),
            headers: self.headers.clone(),
            rows,
        }
    }

    fn to_record(&self, row: &[String]) -> ProfileRecord {
        ProfileRecord::from_fields(
            self.headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.as_str(), v.as_str())),
        )
    }

    pub fn record(&self, index: usize) -> Option<ProfileRecord> {
        self.rows.get(index).map(|row| self.to_record(row))
    }

    pub fn records(&self) -> impl Iterator<Item = ProfileRecord> + '_ {
        self.rows.iter().map(|row| self.to_record(row))
    }

    /// A uniformly random profile, or `None` for an empty dataset.
    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ProfileRecord> {
        self.rows.choose(rng).map(|row| self.to_record(row))
    }

    pub fn find_by_identity(&self, identifier: &str) -> Option<ProfileRecord> {
        self.records()
            .find(|record| record.identity() == Some(identifier.trim()))
    }
}
