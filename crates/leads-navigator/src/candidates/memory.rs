use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Candidate, CandidateId};
use super::repository::{CandidateRepository, RepositoryError};

/// Mutex-guarded map standing in for the candidate table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCandidateRepository {
    records: Arc<Mutex<BTreeMap<CandidateId, Candidate>>>,
}

impl InMemoryCandidateRepository {
    /// Build a repository holding the given candidates; duplicate identifiers conflict.
    pub fn seeded<I>(candidates: I) -> Result<Self, RepositoryError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let repository = Self::default();
        for candidate in candidates {
            repository.insert(candidate)?;
        }
        Ok(repository)
    }

    fn records(&self) -> Result<MutexGuard<'_, BTreeMap<CandidateId, Candidate>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("candidate store lock poisoned".to_string()))
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&candidate.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    fn update(&self, candidate: Candidate) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        match guard.get_mut(&candidate.id) {
            Some(existing) => {
                *existing = candidate;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Ok(self.records()?.get(&id).cloned())
    }

    fn remove(&self, id: CandidateId) -> Result<Candidate, RepositoryError> {
        self.records()?
            .remove(&id)
            .ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.records()?.values().cloned().collect())
    }

    fn next_id(&self) -> Result<CandidateId, RepositoryError> {
        let guard = self.records()?;
        let max = guard.keys().next_back().map(|id| id.0).unwrap_or(0);
        max.checked_add(1)
            .map(CandidateId)
            .ok_or_else(|| {
                RepositoryError::Unavailable("candidate id space exhausted".to_string())
            })
    }
}
