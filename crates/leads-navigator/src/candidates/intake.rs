use super::domain::{CandidateProfile, RiskLevel};

/// Validation errors raised while accepting a succession form submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("candidate name is required")]
    MissingName,
    #[error("department is required")]
    MissingDepartment,
    #[error("portfolio is required")]
    MissingPortfolio,
}

/// Normalizes submitted profiles before they reach the repository.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Reject incomplete submissions and strip the blank rows the form leaves behind.
    pub fn accept(
        &self,
        mut profile: CandidateProfile,
    ) -> Result<CandidateProfile, IntakeViolation> {
        profile.name = profile.name.trim().to_string();
        profile.department = profile.department.trim().to_string();
        profile.portfolio = profile.portfolio.trim().to_string();

        if profile.name.is_empty() {
            return Err(IntakeViolation::MissingName);
        }
        if profile.department.is_empty() {
            return Err(IntakeViolation::MissingDepartment);
        }
        if profile.portfolio.is_empty() {
            return Err(IntakeViolation::MissingPortfolio);
        }

        profile.credentials = profile
            .credentials
            .into_iter()
            .map(|credential| credential.trim().to_string())
            .filter(|credential| !credential.is_empty())
            .collect();
        profile
            .work_history
            .retain(|experience| !experience.title.trim().is_empty());
        profile
            .education
            .retain(|entry| !entry.institution.trim().is_empty());

        let retention = &mut profile.retention_profile;
        retention.risk_of_loss = Some(risk_from_impact(retention.impact_of_loss));

        Ok(profile)
    }
}

/// High and medium impact carry the same risk; anything else is low.
fn risk_from_impact(impact: Option<RiskLevel>) -> RiskLevel {
    match impact {
        Some(RiskLevel::High) => RiskLevel::High,
        Some(RiskLevel::Medium) => RiskLevel::Medium,
        Some(RiskLevel::Low) | None => RiskLevel::Low,
    }
}
