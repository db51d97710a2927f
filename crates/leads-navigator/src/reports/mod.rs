//! Dashboard counts and the exportable succession reports.

mod export;
mod summary;
pub mod views;

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::candidates::{Candidate, CandidateId, RiskLevel};
use crate::leads::{recommend, LeadsFramework, ReadinessRating};

pub use export::{write_report, ExportFormat};
pub use summary::{dashboard_stats, DashboardStats};
pub use views::{DepartmentReportRow, DomainReportRow, ReadinessReportRow, RetentionReportRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Individual,
    Department,
    Readiness,
    Leads,
    Retention,
}

impl ReportKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual Assessment",
            Self::Department => "Department Summary",
            Self::Readiness => "Readiness Distribution",
            Self::Leads => "LEADS Capability",
            Self::Retention => "Retention Risk",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Department => "department",
            Self::Readiness => "readiness",
            Self::Leads => "leads",
            Self::Retention => "retention",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "department" => Ok(Self::Department),
            "readiness" => Ok(Self::Readiness),
            "leads" => Ok(Self::Leads),
            "retention" => Ok(Self::Retention),
            _ => Err(format!("unknown report kind '{value}'")),
        }
    }
}

/// Optional scoping for a report.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    /// Required by the individual report.
    pub candidate: Option<CandidateId>,
    /// Restricts every other report to one department.
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportRows {
    Domains(Vec<DomainReportRow>),
    Departments(Vec<DepartmentReportRow>),
    Readiness(Vec<ReadinessReportRow>),
    Retention(Vec<RetentionReportRow>),
}

impl ReportRows {
    pub fn len(&self) -> usize {
        match self {
            Self::Domains(rows) => rows.len(),
            Self::Departments(rows) => rows.len(),
            Self::Readiness(rows) => rows.len(),
            Self::Retention(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub rows: ReportRows,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("the individual report needs a candidate id")]
    CandidateRequired,
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub fn build_report(
    kind: ReportKind,
    candidates: &[Candidate],
    framework: &LeadsFramework,
    request: &ReportRequest,
) -> Result<Report, ReportError> {
    let rows = match kind {
        ReportKind::Individual => {
            let id = request.candidate.ok_or(ReportError::CandidateRequired)?;
            let candidate = candidates
                .iter()
                .find(|candidate| candidate.id == id)
                .ok_or(ReportError::CandidateNotFound(id))?;
            ReportRows::Domains(domain_rows(candidate, framework))
        }
        ReportKind::Leads => ReportRows::Domains(
            scoped(candidates, request)
                .flat_map(|candidate| domain_rows(candidate, framework))
                .collect(),
        ),
        ReportKind::Department => ReportRows::Departments(department_rows(candidates, request)),
        ReportKind::Readiness => ReportRows::Readiness(readiness_rows(candidates, request)),
        ReportKind::Retention => ReportRows::Retention(retention_rows(candidates, request)),
    };

    Ok(Report { kind, rows })
}

fn scoped<'a>(
    candidates: &'a [Candidate],
    request: &'a ReportRequest,
) -> impl Iterator<Item = &'a Candidate> + 'a {
    candidates.iter().filter(move |candidate| {
        request
            .department
            .as_deref()
            .map_or(true, |department| candidate.profile.department == department)
    })
}

fn domain_rows(candidate: &Candidate, framework: &LeadsFramework) -> Vec<DomainReportRow> {
    candidate
        .leads_scores
        .iter()
        .map(|(domain, score)| {
            let level = score.behavioral_level.level().map(|level| level.get());
            DomainReportRow {
                candidate_id: candidate.id,
                candidate: candidate.profile.name.clone(),
                domain: framework.domain(domain).name,
                behavioral_level: level,
                level_name: level
                    .and_then(|level| framework.scoring_level(level))
                    .map(|scoring| scoring.name),
                recommendation: level
                    .and_then(|level| recommend(framework, domain, level))
                    .map(|recommendation| recommendation.recommendation),
            }
        })
        .collect()
}

#[derive(Default)]
struct DepartmentTally {
    candidates: usize,
    ready: usize,
    developing: usize,
    not_ready: usize,
    not_assessed: usize,
    total_score: u64,
}

fn department_rows(candidates: &[Candidate], request: &ReportRequest) -> Vec<DepartmentReportRow> {
    let mut tallies: BTreeMap<&str, DepartmentTally> = BTreeMap::new();

    for candidate in scoped(candidates, request) {
        let tally = tallies
            .entry(candidate.profile.department.as_str())
            .or_default();
        tally.candidates += 1;
        tally.total_score += u64::from(candidate.total_leads_score);
        match candidate.readiness_rating.unwrap_or(ReadinessRating::NotAssessed) {
            ReadinessRating::Ready => tally.ready += 1,
            ReadinessRating::Developing => tally.developing += 1,
            ReadinessRating::NotReady => tally.not_ready += 1,
            ReadinessRating::NotAssessed => tally.not_assessed += 1,
        }
    }

    tallies
        .into_iter()
        .map(|(department, tally)| {
            let average = tally.total_score as f64 / tally.candidates as f64;
            DepartmentReportRow {
                department: department.to_string(),
                candidates: tally.candidates,
                ready: tally.ready,
                developing: tally.developing,
                not_ready: tally.not_ready,
                not_assessed: tally.not_assessed,
                average_total_score: (average * 10.0).round() / 10.0,
            }
        })
        .collect()
}

fn readiness_rows(candidates: &[Candidate], request: &ReportRequest) -> Vec<ReadinessReportRow> {
    ReadinessRating::ORDERED
        .into_iter()
        .map(|rating| ReadinessReportRow {
            readiness_rating: rating.label(),
            time_to_readiness: rating.time_to_readiness(),
            candidates: scoped(candidates, request)
                .filter(|candidate| {
                    candidate.readiness_rating.unwrap_or(ReadinessRating::NotAssessed) == rating
                })
                .count(),
        })
        .collect()
}

/// Highest risk first; candidates without a recorded risk go last.
fn retention_rows(candidates: &[Candidate], request: &ReportRequest) -> Vec<RetentionReportRow> {
    let mut ranked: Vec<&Candidate> = scoped(candidates, request).collect();
    ranked.sort_by_key(|candidate| (Reverse(candidate.risk_of_loss()), candidate.id));

    ranked
        .into_iter()
        .map(|candidate| {
            let retention = &candidate.profile.retention_profile;
            RetentionReportRow {
                candidate_id: candidate.id,
                candidate: candidate.profile.name.clone(),
                department: candidate.profile.department.clone(),
                risk_of_loss: retention.risk_of_loss.map(RiskLevel::label),
                impact_of_loss: retention.impact_of_loss.map(RiskLevel::label),
                factors: retention.factors.clone(),
                reason_for_leaving: retention.reason_for_leaving.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::bundled_candidates;

    fn seeded() -> Vec<Candidate> {
        bundled_candidates().expect("bundled seed parses")
    }

    fn build(kind: ReportKind, request: ReportRequest) -> Report {
        build_report(kind, &seeded(), &LeadsFramework::standard(), &request)
            .expect("report builds")
    }

    #[test]
    fn dashboard_counts_seeded_candidates() {
        let stats = dashboard_stats(&seeded());

        assert_eq!(
            stats,
            DashboardStats {
                total_candidates: 5,
                ready_candidates: 2,
                developing_candidates: 1,
                high_risk: 2,
                ready_percent: 40,
            }
        );
    }

    #[test]
    fn dashboard_is_zero_when_empty() {
        assert_eq!(dashboard_stats(&[]), DashboardStats::default());
    }

    #[test]
    fn dashboard_rounds_ready_percent() {
        let candidates: Vec<_> = seeded().into_iter().take(3).collect();
        // one of three ready
        assert_eq!(dashboard_stats(&candidates).ready_percent, 33);
    }

    #[test]
    fn individual_report_requires_known_candidate() {
        let candidates = seeded();
        let framework = LeadsFramework::standard();

        match build_report(
            ReportKind::Individual,
            &candidates,
            &framework,
            &ReportRequest::default(),
        ) {
            Err(ReportError::CandidateRequired) => {}
            other => panic!("expected candidate required, got {other:?}"),
        }

        let missing = ReportRequest {
            candidate: Some(CandidateId(404)),
            ..ReportRequest::default()
        };
        match build_report(ReportKind::Individual, &candidates, &framework, &missing) {
            Err(ReportError::CandidateNotFound(CandidateId(404))) => {}
            other => panic!("expected candidate not found, got {other:?}"),
        }
    }

    #[test]
    fn individual_report_lists_domains_with_recommendations() {
        let report = build(
            ReportKind::Individual,
            ReportRequest {
                candidate: Some(CandidateId(2)),
                ..ReportRequest::default()
            },
        );

        let ReportRows::Domains(rows) = report.rows else {
            panic!("expected domain rows");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].domain, "Lead Self");
        assert_eq!(rows[0].behavioral_level, Some(4));
        assert_eq!(rows[0].recommendation, None);
        assert_eq!(rows[1].level_name, Some("Proficient"));
        assert!(rows[1].recommendation.is_some());
        assert_eq!(rows[2].behavioral_level, None);
        assert_eq!(rows[2].recommendation, None);
        assert!(rows[4].recommendation.is_some());
    }

    #[test]
    fn leads_report_honours_department_scope() {
        let report = build(
            ReportKind::Leads,
            ReportRequest {
                department: Some("Clinical Operations".to_string()),
                ..ReportRequest::default()
            },
        );

        assert_eq!(report.rows.len(), 10);
    }

    #[test]
    fn department_report_averages_stored_totals() {
        let report = build(ReportKind::Department, ReportRequest::default());

        let ReportRows::Departments(rows) = report.rows else {
            panic!("expected department rows");
        };
        let clinical = rows
            .iter()
            .find(|row| row.department == "Clinical Operations")
            .expect("clinical operations row");
        assert_eq!(clinical.candidates, 2);
        assert_eq!(clinical.ready, 1);
        assert_eq!(clinical.not_ready, 1);
        assert!((clinical.average_total_score - 17.0).abs() < 1e-9);

        let it = rows
            .iter()
            .find(|row| row.department == "Information Technology")
            .expect("it row");
        assert_eq!(it.not_assessed, 1);
    }

    #[test]
    fn readiness_report_covers_every_rating() {
        let report = build(ReportKind::Readiness, ReportRequest::default());

        let ReportRows::Readiness(rows) = report.rows else {
            panic!("expected readiness rows");
        };
        let counts: Vec<_> = rows
            .iter()
            .map(|row| (row.readiness_rating, row.candidates))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Ready", 2),
                ("Developing", 1),
                ("Not Ready", 1),
                ("Not Assessed", 1)
            ]
        );
    }

    #[test]
    fn retention_report_sorts_highest_risk_first() {
        let mut candidates = seeded();
        candidates[4].profile.retention_profile.risk_of_loss = None;

        let report = build_report(
            ReportKind::Retention,
            &candidates,
            &LeadsFramework::standard(),
            &ReportRequest::default(),
        )
        .expect("report builds");

        let ReportRows::Retention(rows) = report.rows else {
            panic!("expected retention rows");
        };
        let order: Vec<_> = rows.iter().map(|row| row.candidate_id.0).collect();
        assert_eq!(order, vec![2, 4, 1, 3, 5]);
        assert_eq!(rows[4].risk_of_loss, None);
    }

    #[test]
    fn parses_report_kinds() {
        assert_eq!("Retention".parse::<ReportKind>(), Ok(ReportKind::Retention));
        assert_eq!("leads".parse::<ReportKind>(), Ok(ReportKind::Leads));
        assert!("payroll".parse::<ReportKind>().is_err());
    }
}
