use serde::Serialize;

use super::domain::{Candidate, CandidateId, RiskLevel};
use crate::leads::ReadinessRating;

/// Storage abstraction so the service module can be exercised in isolation.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError>;
    fn update(&self, candidate: Candidate) -> Result<(), RepositoryError>;
    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn remove(&self, id: CandidateId) -> Result<Candidate, RepositoryError>;
    /// All candidates ordered by identifier.
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError>;
    /// One past the highest identifier in use, or 1 when empty.
    fn next_id(&self) -> Result<CandidateId, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("candidate already exists")]
    Conflict,
    #[error("candidate not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Criteria used by the candidate list view; unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub readiness: Option<ReadinessRating>,
    pub risk: Option<RiskLevel>,
}

impl CandidateFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn department(department: impl Into<String>) -> Self {
        Self {
            department: Some(department.into()),
            ..Self::default()
        }
    }

    pub fn readiness(rating: ReadinessRating) -> Self {
        Self {
            readiness: Some(rating),
            ..Self::default()
        }
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        let profile = &candidate.profile;

        if let Some(query) = self.search.as_deref().map(str::trim) {
            let needle = query.to_lowercase();
            let hit = [&profile.name, &profile.department, &profile.portfolio]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(department) = &self.department {
            if profile.department != *department {
                return false;
            }
        }

        if let Some(rating) = self.readiness {
            if candidate.readiness_rating != Some(rating) {
                return false;
            }
        }

        if let Some(risk) = self.risk {
            if candidate.risk_of_loss() != Some(risk) {
                return false;
            }
        }

        true
    }
}

/// Row shown in candidate listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummaryView {
    pub id: CandidateId,
    pub name: String,
    pub department: String,
    pub portfolio: String,
    pub total_leads_score: u32,
    pub readiness_rating: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_of_loss: Option<&'static str>,
}

impl Candidate {
    pub fn summary_view(&self) -> CandidateSummaryView {
        CandidateSummaryView {
            id: self.id,
            name: self.profile.name.clone(),
            department: self.profile.department.clone(),
            portfolio: self.profile.portfolio.clone(),
            total_leads_score: self.total_leads_score,
            readiness_rating: self.readiness_label(),
            risk_of_loss: self.risk_of_loss().map(RiskLevel::label),
        }
    }
}
