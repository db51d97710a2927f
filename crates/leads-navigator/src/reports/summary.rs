use serde::Serialize;

use crate::candidates::{Candidate, RiskLevel};
use crate::leads::ReadinessRating;

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub ready_candidates: usize,
    pub developing_candidates: usize,
    pub high_risk: usize,
    pub ready_percent: u32,
}

/// Counts use the stored readiness of each record, not a fresh computation.
pub fn dashboard_stats(candidates: &[Candidate]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_candidates: candidates.len(),
        ..DashboardStats::default()
    };

    for candidate in candidates {
        match candidate.readiness_rating {
            Some(ReadinessRating::Ready) => stats.ready_candidates += 1,
            Some(ReadinessRating::Developing) => stats.developing_candidates += 1,
            _ => {}
        }
        if candidate.risk_of_loss() == Some(RiskLevel::High) {
            stats.high_risk += 1;
        }
    }

    if stats.total_candidates > 0 {
        let percent = stats.ready_candidates as f64 * 100.0 / stats.total_candidates as f64;
        stats.ready_percent = percent.round() as u32;
    }

    stats
}
