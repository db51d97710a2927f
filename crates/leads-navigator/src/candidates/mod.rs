//! Candidate records, intake validation, storage, and the assessment workflow.

pub mod domain;
pub mod intake;
pub mod memory;
pub mod repository;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateId, CandidateProfile, DevelopmentPlan, Education, PerformanceRating,
    PotentialRating, RetentionProfile, RiskLevel, WorkExperience,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use memory::InMemoryCandidateRepository;
pub use repository::{CandidateFilter, CandidateRepository, CandidateSummaryView, RepositoryError};
pub use seed::{bundled_candidates, load_candidates, parse_candidates, SeedError};
pub use service::{AssessmentSummary, CandidateService, CandidateServiceError};
