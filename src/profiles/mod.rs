pub mod record;
pub mod summary;
pub mod timeline;

pub use record::{
    columns, is_valid, EducationEntry, EmploymentEntry, ProfileRecord, EDUCATION_SLOTS,
    PAST_JOB_SLOTS,
};
pub use summary::ProfileSummary;
pub use timeline::{extract_year, EntryKind, TimelineBuilder, TimelineEntry};
