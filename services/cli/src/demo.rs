use crate::commands::{render_dashboard, render_history, render_outcome, render_profile};
use crate::infra::{parse_date, Session};
use chrono::{Local, NaiveDate};
use clap::Args;
use leads_navigator::candidates::{
    CandidateProfile, DevelopmentPlan, Education, PerformanceRating, PotentialRating,
    RetentionProfile, RiskLevel, WorkExperience,
};
use leads_navigator::error::AppError;
use leads_navigator::leads::{
    Domain, LeadsScoreSet, Rating, ReadinessRating, DEFAULT_MONTHS_BACK,
};
use leads_navigator::reports::{
    build_report, dashboard_stats, ReportKind, ReportRequest, ReportRows,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Reference date for the trend (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seed for the synthetic trend
    #[arg(long, default_value_t = 2024)]
    pub(crate) seed: u64,
    /// Skip the intake and assessment portion of the demo.
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_demo(session: &Session, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        seed,
        skip_intake,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = &session.service;
    let framework = service.framework();

    println!("LEADS Navigator demo");
    render_dashboard(&dashboard_stats(&service.all()?));

    println!("\nLEADS framework");
    for definition in framework.domains() {
        println!(
            "- {}: {} ({} observable behaviors)",
            definition.name,
            definition.description,
            definition.behaviors.len()
        );
    }
    let levels: Vec<_> = framework
        .scoring_levels()
        .iter()
        .map(|level| format!("{} {}", level.level, level.name))
        .collect();
    println!("Scale: {}", levels.join(" | "));

    if !skip_intake {
        println!("\nSuccession form intake");
        let mut incomplete = demo_profile();
        incomplete.portfolio.clear();
        match service.create(incomplete) {
            Ok(candidate) => println!("  Unexpectedly accepted #{}", candidate.id),
            Err(err) => println!("  Rejected incomplete submission: {err}"),
        }

        let candidate = service.create(demo_profile())?;
        println!("  Accepted submission as #{}", candidate.id);
        render_profile(&candidate);

        let scores = demo_scores();
        println!("\nPreview before saving");
        render_outcome(&service.preview_assessment(&scores));

        println!("\nSaved assessment");
        let outcome = service.save_assessment(candidate.id, scores)?;
        render_outcome(&outcome);

        match service.save_assessment(candidate.id, LeadsScoreSet::default()) {
            Ok(_) => println!("  Unexpectedly saved an empty assessment"),
            Err(err) => println!("  Empty assessment refused: {err}"),
        }
    }

    let ready = service.by_readiness(ReadinessRating::Ready)?;
    if let Some(candidate) = ready.first() {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let months = DEFAULT_MONTHS_BACK.min(session.config.data.history_months);
        let entries = service.history(candidate.id, months, today, &mut rng)?;
        println!(
            "\nSynthetic trend for {} (last {} months, seed {})",
            candidate.profile.name, months, seed
        );
        render_history(framework, &entries);
    }

    let candidates = service.all()?;
    let report = build_report(
        ReportKind::Retention,
        &candidates,
        framework,
        &ReportRequest::default(),
    )?;
    if let ReportRows::Retention(rows) = &report.rows {
        println!("\n{}", report.kind);
        for row in rows.iter().take(3) {
            println!(
                "- {} ({}): risk {} | impact {} | {}",
                row.candidate,
                row.department,
                row.risk_of_loss.unwrap_or("-"),
                row.impact_of_loss.unwrap_or("-"),
                row.factors
            );
        }
    }

    println!();
    render_dashboard(&dashboard_stats(&candidates));
    Ok(())
}

fn demo_profile() -> CandidateProfile {
    CandidateProfile {
        username: "jordan.avery".to_string(),
        name: "Jordan Avery".to_string(),
        department: "Clinical Operations".to_string(),
        portfolio: "Mental Health and Addictions".to_string(),
        credentials: vec!["MSW".to_string(), "RSW".to_string()],
        length_of_service: 9,
        performance_rating: Some(PerformanceRating::Exceeds),
        potential_rating: Some(PotentialRating::Medium),
        leadership_accomplishments: "Opened two community crisis stabilization sites.".to_string(),
        demonstrated_strengths: "Partnership building, calm escalation handling.".to_string(),
        work_history: vec![WorkExperience {
            title: "Manager, Community Mental Health".to_string(),
            division: "Clinical Operations".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 6),
            end_date: None,
            is_external: false,
        }],
        education: vec![Education {
            institution: "McGill University".to_string(),
            program: "Social Work".to_string(),
            level: "Master".to_string(),
        }],
        development_plan: DevelopmentPlan {
            key_areas: "Results orientation, system redesign".to_string(),
            actions: "Co-lead the provincial access redesign".to_string(),
        },
        retention_profile: RetentionProfile {
            factors: "Mission alignment".to_string(),
            reason_for_leaving: String::new(),
            impact_of_loss: Some(RiskLevel::High),
            risk_of_loss: None,
        },
    }
}

fn demo_scores() -> LeadsScoreSet {
    LeadsScoreSet::from_ratings([
        (Domain::LeadSelf, Rating::parse("4")),
        (Domain::EngageOthers, Rating::parse("5")),
        (Domain::AchieveResults, Rating::parse("3")),
        (Domain::DevelopCoalitions, Rating::parse("4")),
        (Domain::SystemsTransformation, Rating::parse("2")),
    ])
}
