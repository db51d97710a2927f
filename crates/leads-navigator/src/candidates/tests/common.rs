use std::sync::Arc;

use crate::candidates::domain::{
    Candidate, CandidateId, CandidateProfile, Education, RetentionProfile, RiskLevel,
    WorkExperience,
};
use crate::candidates::memory::InMemoryCandidateRepository;
use crate::candidates::repository::{CandidateRepository, RepositoryError};
use crate::candidates::seed::bundled_candidates;
use crate::candidates::service::CandidateService;
use crate::leads::{Domain, LeadsFramework, LeadsScoreSet, Rating};

pub(super) fn profile(name: &str, department: &str) -> CandidateProfile {
    CandidateProfile {
        username: name.to_lowercase().replace(' ', "."),
        name: name.to_string(),
        department: department.to_string(),
        portfolio: "Strategic Initiatives".to_string(),
        credentials: vec!["MBA".to_string(), "  ".to_string()],
        length_of_service: 6,
        work_history: vec![
            WorkExperience {
                title: "Program Manager".to_string(),
                division: department.to_string(),
                ..WorkExperience::default()
            },
            WorkExperience::default(),
        ],
        education: vec![
            Education {
                institution: "Dalhousie University".to_string(),
                program: "Public Administration".to_string(),
                level: "Master".to_string(),
            },
            Education::default(),
        ],
        retention_profile: RetentionProfile {
            impact_of_loss: Some(RiskLevel::Medium),
            ..RetentionProfile::default()
        },
        ..CandidateProfile::default()
    }
}

pub(super) fn ratings(levels: [&str; 5]) -> LeadsScoreSet {
    LeadsScoreSet::from_ratings(
        Domain::ALL
            .into_iter()
            .zip(levels)
            .map(|(domain, raw)| (domain, Rating::parse(raw))),
    )
}

pub(super) fn seeded_repository() -> Arc<InMemoryCandidateRepository> {
    let candidates = bundled_candidates().expect("bundled seed parses");
    Arc::new(InMemoryCandidateRepository::seeded(candidates).expect("seed ids unique"))
}

pub(super) fn build_service() -> (
    CandidateService<InMemoryCandidateRepository>,
    Arc<InMemoryCandidateRepository>,
) {
    let repository = seeded_repository();
    let service = CandidateService::new(repository.clone(), LeadsFramework::standard());
    (service, repository)
}

pub(super) struct ConflictRepository;

impl CandidateRepository for ConflictRepository {
    fn insert(&self, _candidate: Candidate) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _candidate: Candidate) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Ok(None)
    }

    fn remove(&self, _id: CandidateId) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(Vec::new())
    }

    fn next_id(&self) -> Result<CandidateId, RepositoryError> {
        Ok(CandidateId(1))
    }
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn insert(&self, _candidate: Candidate) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _candidate: Candidate) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: CandidateId) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn next_id(&self) -> Result<CandidateId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
