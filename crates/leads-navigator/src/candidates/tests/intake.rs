use super::common::*;
use crate::candidates::domain::RiskLevel;
use crate::candidates::intake::{IntakeGuard, IntakeViolation};

#[test]
fn guard_requires_name_department_and_portfolio() {
    let guard = IntakeGuard;

    let mut missing_name = profile("Ada Lovelace", "Finance");
    missing_name.name = "   ".to_string();
    assert_eq!(guard.accept(missing_name), Err(IntakeViolation::MissingName));

    let missing_department = profile("Ada Lovelace", "");
    assert_eq!(
        guard.accept(missing_department),
        Err(IntakeViolation::MissingDepartment)
    );

    let mut missing_portfolio = profile("Ada Lovelace", "Finance");
    missing_portfolio.portfolio.clear();
    assert_eq!(
        guard.accept(missing_portfolio),
        Err(IntakeViolation::MissingPortfolio)
    );
}

#[test]
fn guard_strips_blank_rows_and_trims_fields() {
    let mut submitted = profile("Ada Lovelace", "Finance");
    submitted.name = "  Ada Lovelace ".to_string();

    let accepted = IntakeGuard.accept(submitted).expect("valid profile");

    assert_eq!(accepted.name, "Ada Lovelace");
    assert_eq!(accepted.credentials, vec!["MBA".to_string()]);
    assert_eq!(accepted.work_history.len(), 1);
    assert_eq!(accepted.education.len(), 1);
}

#[test]
fn guard_derives_risk_of_loss_from_impact() {
    let cases = [
        (Some(RiskLevel::High), RiskLevel::High),
        (Some(RiskLevel::Medium), RiskLevel::Medium),
        (Some(RiskLevel::Low), RiskLevel::Low),
        (None, RiskLevel::Low),
    ];

    for (impact, expected) in cases {
        let mut submitted = profile("Ada Lovelace", "Finance");
        submitted.retention_profile.impact_of_loss = impact;
        submitted.retention_profile.risk_of_loss = Some(RiskLevel::High);

        let accepted = IntakeGuard.accept(submitted).expect("valid profile");

        assert_eq!(accepted.retention_profile.risk_of_loss, Some(expected));
    }
}
