use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::leads::{Domain, LeadsScoreSet, Rating};

pub(super) fn score_set(levels: &[(Domain, &str)]) -> LeadsScoreSet {
    LeadsScoreSet::from_ratings(
        levels
            .iter()
            .map(|(domain, raw)| (*domain, Rating::parse(raw))),
    )
}

/// Lead self 4, engage others 3, achieve results unset, develop coalitions 5,
/// systems transformation 2.
pub(super) fn mixed_score_set() -> LeadsScoreSet {
    score_set(&[
        (Domain::LeadSelf, "4"),
        (Domain::EngageOthers, "3"),
        (Domain::AchieveResults, ""),
        (Domain::DevelopCoalitions, "5"),
        (Domain::SystemsTransformation, "2"),
    ])
}

pub(super) fn uniform_score_set(level: &str) -> LeadsScoreSet {
    score_set(&Domain::ALL.map(|domain| (domain, level)))
}

pub(super) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 18).expect("valid date")
}
