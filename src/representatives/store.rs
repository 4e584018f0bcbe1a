use super::backend::StoreBackend;
use super::entry::{RepresentativeEntry, UNKNOWN_IDENTITY};
use crate::profiles::ProfileRecord;
use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Default number of representatives kept per domain.
pub const DEFAULT_MAX_PER_DOMAIN: usize = 3;

/// Bounded per-domain collection of representative profiles.
///
/// Every `record` is a full read-modify-write against the backend. At most
/// one writer may use a given backend at a time.
pub struct ProfileStore<B: StoreBackend> {
    backend: B,
    max_per_domain: usize,
}

impl<B: StoreBackend> ProfileStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            max_per_domain: DEFAULT_MAX_PER_DOMAIN,
        }
    }

    pub fn with_capacity(backend: B, max_per_domain: usize) -> Result<Self> {
        if max_per_domain == 0 {
            bail!("max_per_domain must be at least 1");
        }
        Ok(Self {
            backend,
            max_per_domain,
        })
    }

    /// Stores `profile` as representative of `domain` for `source_group`,
    /// captured now.
    pub fn record(&self, profile: &ProfileRecord, domain: &str, source_group: &str) -> Result<()> {
        self.record_at(profile, domain, source_group, Utc::now())
    }

    /// Same as [`Self::record`] with an explicit capture time.
    ///
    /// A capture time not strictly after the newest stored timestamp is moved
    /// one microsecond past it, keeping timestamps increasing.
    pub fn record_at(
        &self,
        profile: &ProfileRecord,
        domain: &str,
        source_group: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<()> {
        if domain.trim().is_empty() {
            bail!("domain label must not be empty");
        }
        if source_group.trim().is_empty() {
            bail!("source group label must not be empty");
        }

        let mut entries = self.backend.load()?;

        let in_domain = entries.iter().filter(|e| e.domain == domain).count();
        if in_domain >= self.max_per_domain {
            if let Some(index) = oldest_in_domain(&entries, domain) {
                let evicted = entries.remove(index);
                tracing::info!(
                    domain,
                    identifier = %evicted.identifier,
                    timestamp = %evicted.timestamp,
                    "evicting oldest representative"
                );
            }
        }

        let timestamp = match entries.iter().map(|e| e.timestamp).max() {
            Some(newest) if newest >= captured_at => newest + Duration::microseconds(1),
            _ => captured_at,
        };
        let identifier = profile.identity().unwrap_or(UNKNOWN_IDENTITY).to_string();
        if identifier == UNKNOWN_IDENTITY {
            tracing::warn!(domain, source_group, "profile has no public identifier");
        }

        tracing::debug!(domain, source_group, identifier = %identifier, "recording representative");
        entries.push(RepresentativeEntry {
            identifier,
            domain: domain.to_string(),
            source_group: source_group.to_string(),
            timestamp,
        });
        self.backend.save(&entries)
    }

    /// All stored entries, in storage order.
    pub fn entries(&self) -> Result<Vec<RepresentativeEntry>> {
        self.backend.load()
    }

    /// Entries of one domain, oldest first.
    pub fn entries_for_domain(&self, domain: &str) -> Result<Vec<RepresentativeEntry>> {
        let mut entries: Vec<_> = self
            .backend
            .load()?
            .into_iter()
            .filter(|e| e.domain == domain)
            .collect();
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }

    /// Number of stored entries per domain.
    pub fn domain_counts(&self) -> Result<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for entry in self.backend.load()? {
            *counts.entry(entry.domain).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Position of the minimum-timestamp entry of `domain`; ties go to the
/// earliest position.
fn oldest_in_domain(entries: &[RepresentativeEntry], domain: &str) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.domain == domain)
        .min_by_key(|(index, e)| (e.timestamp, *index))
        .map(|(index, _)| index)
}
