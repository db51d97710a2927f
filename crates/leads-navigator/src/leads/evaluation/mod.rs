mod policy;
mod rules;

pub use policy::{DevelopmentPathway, ReadinessRating};

use super::domain::LeadsScoreSet;
use serde::Serialize;

/// Highest total a fully rated score set can reach (five domains at level 5).
pub const MAX_DISPLAY_TOTAL: u32 = 25;

/// Aggregate score and readiness classification for one score set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResult {
    pub total_score: u32,
    pub average_score: f64,
    pub readiness_rating: ReadinessRating,
    pub time_to_readiness: &'static str,
    pub development_pathway: Option<DevelopmentPathway>,
}

impl ReadinessResult {
    /// Share of `MAX_DISPLAY_TOTAL` used by progress displays, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        (f64::from(self.total_score) / f64::from(MAX_DISPLAY_TOTAL) * 100.0).min(100.0)
    }
}

/// Sum, average, and classify the valid behavioral levels of a score set.
///
/// Unset and invalid ratings are left out of the average rather than counted as zero, so a
/// partially completed assessment is classified on what has been rated so far.
pub fn compute_readiness(scores: &LeadsScoreSet) -> ReadinessResult {
    let tally = rules::tally_levels(scores);
    let average = tally.average();
    let readiness_rating = policy::classify(average);

    ReadinessResult {
        total_score: tally.total,
        average_score: average.unwrap_or(0.0),
        readiness_rating,
        time_to_readiness: readiness_rating.time_to_readiness(),
        development_pathway: readiness_rating.development_pathway(),
    }
}
