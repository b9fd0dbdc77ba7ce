mod collation;
pub mod domain;
pub mod export;
mod importer;
pub mod instructors;
mod parser;
pub mod stats;
pub mod summary;

pub use domain::{AgeStats, Candidate, RoleGroups, RolePercentage};
pub use export::{write_report, ReportWriteError};
pub use importer::{read_candidates, CandidateImporter, ImportError};
pub use instructors::{find_first, CandidatePredicate, MOBILE_INSTRUCTOR, QA_INSTRUCTOR};
pub use summary::{AcademySummary, SummaryError};
