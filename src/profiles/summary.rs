use super::record::{is_valid, text, ProfileRecord};
use serde::{Deserialize, Serialize};

const UNSPECIFIED_JOB: &str = "Non spécifié";

/// Headline facts shown next to a profile's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub job_title: String,
    pub company: String,
    pub last_degree: String,
    pub degree_level: String,
    pub degree_domain: String,
    pub broad_domain: String,
    pub institution: String,
    pub status: String,
    pub domain: String,
}

impl ProfileSummary {
    pub fn from_record(profile: &ProfileRecord) -> Self {
        let job_title = if is_valid(profile.current_job.title.as_deref()) {
            text(&profile.current_job.title).to_string()
        } else {
            UNSPECIFIED_JOB.to_string()
        };
        let first_degree = &profile.education[0];
        Self {
            job_title,
            company: text(&profile.current_job.company).to_string(),
            last_degree: text(&first_degree.title).to_string(),
            degree_level: text(&profile.degree_level).to_string(),
            degree_domain: text(&profile.degree_domain).to_string(),
            broad_domain: text(&profile.broad_domain).to_string(),
            institution: text(&first_degree.institution).to_string(),
            status: text(&profile.socio_professional_category).to_string(),
            domain: text(&profile.last_position_domain).to_string(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Position: {} at {}", self.job_title, self.company),
            format!(
                "Last degree: {} ({} - {})",
                self.last_degree, self.degree_level, self.degree_domain
            ),
            format!("Field of study: {}", self.broad_domain),
            format!("Institution: {}", self.institution),
            format!("Status: {}", self.status),
            format!("Domain: {}", self.domain),
        ]
    }
}
