use serde::{Deserialize, Serialize};

/// Number of education slots a profile row carries (`#1` through `#5`).
pub const EDUCATION_SLOTS: usize = 5;
/// Number of past-employment slots a profile row carries (`#1` through `#4`).
pub const PAST_JOB_SLOTS: usize = 4;

/// Column headers of the scraped profile tables.
pub mod columns {
    pub const PROFILE_URL: &str = "Profile Public URL";

    pub const DEGREE_TITLE_PREFIX: &str = "Diplôme Titre #";
    pub const INSTITUTION_PREFIX: &str = "Établissement Diplôme #";
    pub const STUDY_PERIOD_PREFIX: &str = "Study Period #";

    pub const JOB_TITLE: &str = "Job Title";
    pub const COMPANY_NAME: &str = "Company Name";
    pub const TENURE: &str = "Tenure";

    pub const PAST_JOB_TITLE_PREFIX: &str = "Past Job Title #";
    pub const PAST_COMPANY_PREFIX: &str = "Past Company Name #";
    pub const PAST_TENURE_PREFIX: &str = "Past Tenure #";

    pub const DEGREE_LEVEL: &str = "Niveau Diplôme #1";
    pub const DEGREE_DOMAIN: &str = "Domaine Diplôme #1";
    pub const BROAD_DOMAIN: &str = "Domaine Large #1";
    pub const LAST_POSITION_DOMAIN: &str = "Domaine du dernier poste";
    pub const SOCIO_PROFESSIONAL_CATEGORY: &str = "Catégorie socio-professionnelle";
}

/// True when the value is present, non-blank and not a `nan` placeholder.
pub fn is_valid(value: Option<&str>) -> bool {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("nan")
        }
        None => false,
    }
}

pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: Option<String>,
    pub institution: Option<String>,
    pub period: Option<String>,
}

impl EducationEntry {
    pub fn has_content(&self) -> bool {
        is_valid(self.title.as_deref())
            || is_valid(self.institution.as_deref())
            || is_valid(self.period.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub tenure: Option<String>,
}

impl EmploymentEntry {
    pub fn has_content(&self) -> bool {
        is_valid(self.title.as_deref())
            || is_valid(self.company.as_deref())
            || is_valid(self.tenure.as_deref())
    }
}

/// One profile row with its fields of interest pulled out by name.
///
/// Every field is optional; empty cells and unknown columns are dropped at
/// construction so consumers never have to second-guess raw table values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile_url: Option<String>,
    pub education: [EducationEntry; EDUCATION_SLOTS],
    pub current_job: EmploymentEntry,
    pub past_jobs: [EmploymentEntry; PAST_JOB_SLOTS],
    pub degree_level: Option<String>,
    pub degree_domain: Option<String>,
    pub broad_domain: Option<String>,
    pub last_position_domain: Option<String>,
    pub socio_professional_category: Option<String>,
}

impl ProfileRecord {
    /// Builds a record from `(column, value)` pairs of one table row.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = Self::default();
        for (column, value) in fields {
            if value.is_empty() {
                continue;
            }
            record.assign(column, value.to_string());
        }
        record
    }

    fn assign(&mut self, column: &str, value: String) {
        use columns::*;

        let target = match column {
            PROFILE_URL => &mut self.profile_url,
            JOB_TITLE => &mut self.current_job.title,
            COMPANY_NAME => &mut self.current_job.company,
            TENURE => &mut self.current_job.tenure,
            DEGREE_LEVEL => &mut self.degree_level,
            DEGREE_DOMAIN => &mut self.degree_domain,
            BROAD_DOMAIN => &mut self.broad_domain,
            LAST_POSITION_DOMAIN => &mut self.last_position_domain,
            SOCIO_PROFESSIONAL_CATEGORY => &mut self.socio_professional_category,
            _ => {
                if let Some(i) = slot(column, DEGREE_TITLE_PREFIX, EDUCATION_SLOTS) {
                    &mut self.education[i].title
                } else if let Some(i) = slot(column, INSTITUTION_PREFIX, EDUCATION_SLOTS) {
                    &mut self.education[i].institution
                } else if let Some(i) = slot(column, STUDY_PERIOD_PREFIX, EDUCATION_SLOTS) {
                    &mut self.education[i].period
                } else if let Some(i) = slot(column, PAST_JOB_TITLE_PREFIX, PAST_JOB_SLOTS) {
                    &mut self.past_jobs[i].title
                } else if let Some(i) = slot(column, PAST_COMPANY_PREFIX, PAST_JOB_SLOTS) {
                    &mut self.past_jobs[i].company
                } else if let Some(i) = slot(column, PAST_TENURE_PREFIX, PAST_JOB_SLOTS) {
                    &mut self.past_jobs[i].tenure
                } else {
                    return;
                }
            }
        };
        *target = Some(value);
    }

    /// Public identifier when it holds a usable value.
    pub fn identity(&self) -> Option<&str> {
        self.profile_url
            .as_deref()
            .filter(|url| is_valid(Some(*url)))
            .map(str::trim)
    }
}

/// Maps `"<prefix><n>"` to the zero-based slot index when `1 <= n <= slots`.
fn slot(column: &str, prefix: &str, slots: usize) -> Option<usize> {
    let n: usize = column.strip_prefix(prefix)?.parse().ok()?;
    (1..=slots).contains(&n).then(|| n - 1)
}
