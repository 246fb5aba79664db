//! Respondent profiles, stored responses, and the admin surface over them.
//!
//! The service validates the profile, runs the scoring core, and hands the
//! finished record to a [`ResponseRepository`]. Listing, statistics, and export
//! read back through the same repository.

pub mod domain;
pub mod export;
pub mod filter;
pub mod profile;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AssessmentSubmission, ResponseId, ResponseRecord, ScoreRequest};
pub use export::{export_filename, export_records, ExportError, ExportFormat, ExportPayload};
pub use filter::{AgeBracket, GenderDistribution, GenderFilter, ResponseFilter, ResponseStatistics};
pub use profile::{nationality_label, BiologicalGender, ProfileViolation, RespondentProfile, NATIONALITIES};
pub use repository::{RepositoryError, ResponseRepository};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
