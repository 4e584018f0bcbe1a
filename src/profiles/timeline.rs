//! Chronological narrative of a profile's education and employment history.
//!
//! Each education or employment slot holding at least one valid field
//! becomes a [`TimelineEntry`]. Entries are ordered by the first four-digit
//! year found in their period text; entries without such a year sort first.
//! The sort is stable, so slots sharing a year keep their encounter order
//! (education slots, then the current job, then past jobs).

use super::record::{text, EducationEntry, EmploymentEntry, ProfileRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Education,
    Employment,
}

impl EntryKind {
    pub fn marker(self) -> &'static str {
        match self {
            EntryKind::Education => "🎓",
            EntryKind::Employment => "💼",
        }
    }
}

/// One line of the narrative, keyed by the year extracted from its period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: EntryKind,
    /// Sort key; `0` when the period holds no four-digit year.
    pub year: i32,
    pub title: String,
    pub organisation: String,
    pub period: String,
}

impl TimelineEntry {
    fn from_education(entry: &EducationEntry) -> Self {
        Self::new(
            EntryKind::Education,
            text(&entry.title),
            text(&entry.institution),
            text(&entry.period),
        )
    }

    fn from_employment(entry: &EmploymentEntry) -> Self {
        Self::new(
            EntryKind::Employment,
            text(&entry.title),
            text(&entry.company),
            text(&entry.tenure),
        )
    }

    fn new(kind: EntryKind, title: &str, organisation: &str, period: &str) -> Self {
        Self {
            kind,
            year: extract_year(Some(period)),
            title: title.to_string(),
            organisation: organisation.to_string(),
            period: period.to_string(),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} – {} ({})",
            self.kind.marker(),
            self.title,
            self.organisation,
            self.period
        )
    }
}

/// Returns the first whitespace-separated token made of exactly four ASCII
/// digits, or `0` when there is none.
pub fn extract_year(period: Option<&str>) -> i32 {
    period
        .into_iter()
        .flat_map(str::split_whitespace)
        .find(|token| token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

/// Builds ordered timelines from profile records. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineBuilder;

impl TimelineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Typed entries of the profile, sorted by year.
    pub fn entries(&self, profile: &ProfileRecord) -> Vec<TimelineEntry> {
        let education = profile
            .education
            .iter()
            .filter(|entry| entry.has_content())
            .map(TimelineEntry::from_education);
        let current = std::iter::once(&profile.current_job)
            .filter(|entry| entry.has_content())
            .map(TimelineEntry::from_employment);
        let past = profile
            .past_jobs
            .iter()
            .filter(|entry| entry.has_content())
            .map(TimelineEntry::from_employment);

        let mut entries: Vec<TimelineEntry> = education.chain(current).chain(past).collect();
        // `sort_by_key` is stable.
        entries.sort_by_key(|entry| entry.year);
        entries
    }

    /// Formatted narrative lines of the profile, oldest first.
    pub fn build(&self, profile: &ProfileRecord) -> Vec<String> {
        self.entries(profile)
            .iter()
            .map(TimelineEntry::label)
            .collect()
    }
}
