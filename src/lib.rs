pub mod datasets;
pub mod profiles;
pub mod representatives;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use datasets::{DatasetSource, ProfileDataset};
pub use profiles::{ProfileRecord, ProfileSummary, TimelineBuilder, TimelineEntry};
pub use representatives::{CsvFileBackend, MemoryBackend, ProfileStore, RepresentativeEntry};
pub use workspace::{AppConfig, Workspace};
