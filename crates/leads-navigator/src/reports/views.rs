use serde::Serialize;

use crate::candidates::CandidateId;

/// One domain of one candidate, used by the individual and LEADS reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReportRow {
    pub candidate_id: CandidateId,
    pub candidate: String,
    pub domain: &'static str,
    pub behavioral_level: Option<u8>,
    pub level_name: Option<&'static str>,
    pub recommendation: Option<&'static str>,
}

impl DomainReportRow {
    pub const HEADER: [&'static str; 6] = [
        "candidateId",
        "candidate",
        "domain",
        "behavioralLevel",
        "levelName",
        "recommendation",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentReportRow {
    pub department: String,
    pub candidates: usize,
    pub ready: usize,
    pub developing: usize,
    pub not_ready: usize,
    pub not_assessed: usize,
    pub average_total_score: f64,
}

impl DepartmentReportRow {
    pub const HEADER: [&'static str; 7] = [
        "department",
        "candidates",
        "ready",
        "developing",
        "notReady",
        "notAssessed",
        "averageTotalScore",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReportRow {
    pub readiness_rating: &'static str,
    pub time_to_readiness: &'static str,
    pub candidates: usize,
}

impl ReadinessReportRow {
    pub const HEADER: [&'static str; 3] = ["readinessRating", "timeToReadiness", "candidates"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionReportRow {
    pub candidate_id: CandidateId,
    pub candidate: String,
    pub department: String,
    pub risk_of_loss: Option<&'static str>,
    pub impact_of_loss: Option<&'static str>,
    pub factors: String,
    pub reason_for_leaving: String,
}

impl RetentionReportRow {
    pub const HEADER: [&'static str; 7] = [
        "candidateId",
        "candidate",
        "department",
        "riskOfLoss",
        "impactOfLoss",
        "factors",
        "reasonForLeaving",
    ];
}
