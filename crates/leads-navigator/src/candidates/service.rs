use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Candidate, CandidateId, CandidateProfile};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{CandidateFilter, CandidateRepository, RepositoryError};
use crate::leads::{
    compute_readiness, generate_history, recommendations_for, HistoricalEntry, LeadsFramework,
    LeadsScoreSet, ReadinessRating, ReadinessResult, Recommendation,
};

/// Service composing intake validation, the repository, and LEADS scoring.
pub struct CandidateService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
    framework: Arc<LeadsFramework>,
}

/// Readiness result and recommendations for one score set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub result: ReadinessResult,
    pub recommendations: Vec<Recommendation>,
}

impl<R> CandidateService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>, framework: LeadsFramework) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            framework: Arc::new(framework),
        }
    }

    pub fn framework(&self) -> &LeadsFramework {
        &self.framework
    }

    pub fn list(&self, filter: &CandidateFilter) -> Result<Vec<Candidate>, CandidateServiceError> {
        let candidates = self.repository.list()?;
        Ok(candidates
            .into_iter()
            .filter(|candidate| filter.matches(candidate))
            .collect())
    }

    pub fn all(&self) -> Result<Vec<Candidate>, CandidateServiceError> {
        Ok(self.repository.list()?)
    }

    /// Case-insensitive match on name, department, or portfolio.
    pub fn search(&self, query: &str) -> Result<Vec<Candidate>, CandidateServiceError> {
        self.list(&CandidateFilter::search(query))
    }

    pub fn by_department(&self, department: &str) -> Result<Vec<Candidate>, CandidateServiceError> {
        self.list(&CandidateFilter::department(department))
    }

    pub fn by_readiness(
        &self,
        rating: ReadinessRating,
    ) -> Result<Vec<Candidate>, CandidateServiceError> {
        self.list(&CandidateFilter::readiness(rating))
    }

    pub fn get(&self, id: CandidateId) -> Result<Candidate, CandidateServiceError> {
        let candidate = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(candidate)
    }

    /// Validate and store a new candidate under the next free identifier.
    pub fn create(&self, profile: CandidateProfile) -> Result<Candidate, CandidateServiceError> {
        let profile = self.guard.accept(profile)?;
        let id = self.repository.next_id()?;

        let mut candidate = Candidate::new(id, profile);
        candidate.created_at = Some(Utc::now());

        let stored = self.repository.insert(candidate)?;
        info!(candidate_id = %stored.id, name = %stored.profile.name, "candidate created");
        Ok(stored)
    }

    /// Replace the profile fields of a candidate, keeping its identifier and assessment.
    pub fn update(
        &self,
        id: CandidateId,
        profile: CandidateProfile,
    ) -> Result<Candidate, CandidateServiceError> {
        let profile = self.guard.accept(profile)?;
        let mut candidate = self.get(id)?;

        candidate.profile = profile;
        candidate.updated_at = Some(Utc::now());

        self.repository.update(candidate.clone())?;
        info!(candidate_id = %id, "candidate updated");
        Ok(candidate)
    }

    pub fn delete(&self, id: CandidateId) -> Result<Candidate, CandidateServiceError> {
        let removed = self.repository.remove(id)?;
        info!(candidate_id = %id, "candidate deleted");
        Ok(removed)
    }

    /// Score a set without touching any record.
    pub fn preview_assessment(&self, scores: &LeadsScoreSet) -> AssessmentSummary {
        AssessmentSummary {
            result: compute_readiness(scores),
            recommendations: recommendations_for(&self.framework, scores),
        }
    }

    /// Store a LEADS assessment and write the recomputed readiness fields onto the record.
    pub fn save_assessment(
        &self,
        id: CandidateId,
        scores: LeadsScoreSet,
    ) -> Result<AssessmentSummary, CandidateServiceError> {
        if !scores.has_valid_level() {
            return Err(CandidateServiceError::NoScores);
        }

        let mut candidate = self.get(id)?;
        let summary = self.preview_assessment(&scores);

        candidate.leads_scores = scores;
        candidate.apply_result(&summary.result);
        candidate.updated_at = Some(Utc::now());
        self.repository.update(candidate)?;

        info!(
            candidate_id = %id,
            total = summary.result.total_score,
            rating = %summary.result.readiness_rating,
            "leads assessment saved"
        );
        Ok(summary)
    }

    /// Synthetic trend for a candidate's current scores.
    pub fn history<G>(
        &self,
        id: CandidateId,
        months_back: u32,
        today: NaiveDate,
        rng: &mut G,
    ) -> Result<Vec<HistoricalEntry>, CandidateServiceError>
    where
        G: Rng + ?Sized,
    {
        let candidate = self.get(id)?;
        let entries: Vec<_> =
            generate_history(&candidate.leads_scores, months_back, today, rng).collect();
        debug!(candidate_id = %id, months = entries.len(), "generated score history");
        Ok(entries)
    }
}

/// Error raised by the candidate service.
#[derive(Debug, thiserror::Error)]
pub enum CandidateServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("please provide at least one behavioral level score")]
    NoScores,
}
