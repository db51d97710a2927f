use crate::infra::{parse_candidate_id, parse_date, parse_months, Session};
use chrono::{Local, NaiveDate};
use clap::Args;
use leads_navigator::candidates::{
    AssessmentSummary, Candidate, CandidateFilter, CandidateId, RiskLevel,
};
use leads_navigator::error::AppError;
use leads_navigator::leads::{
    BehavioralLevel, Domain, HistoricalEntry, LeadsFramework, LeadsScoreSet, Rating,
    ReadinessRating, MAX_DISPLAY_TOTAL,
};
use leads_navigator::reports::{
    build_report, dashboard_stats, write_report, DashboardStats, ExportFormat, ReportKind,
    ReportRequest,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Exact department name
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Ready, Developing, Not Ready, or Not Assessed
    #[arg(long)]
    pub(crate) readiness: Option<ReadinessRating>,
    /// Retention risk: Low, Medium, or High
    #[arg(long)]
    pub(crate) risk: Option<RiskLevel>,
    /// Case-insensitive match on name, department, or portfolio
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Print the listing as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    #[arg(value_parser = parse_candidate_id)]
    pub(crate) id: CandidateId,
    /// Print the stored record as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    #[arg(value_parser = parse_candidate_id)]
    pub(crate) id: CandidateId,
    /// Lead Self behavioral level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) lead_self: Option<u8>,
    /// Engage Others behavioral level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) engage_others: Option<u8>,
    /// Achieve Results behavioral level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) achieve_results: Option<u8>,
    /// Develop Coalitions behavioral level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) develop_coalitions: Option<u8>,
    /// Systems Transformation behavioral level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) systems_transformation: Option<u8>,
    /// Compute the result without storing it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

impl AssessArgs {
    /// Levels given on the command line, keyed by domain.
    fn overrides(&self) -> [(Domain, Option<u8>); 5] {
        [
            (Domain::LeadSelf, self.lead_self),
            (Domain::EngageOthers, self.engage_others),
            (Domain::AchieveResults, self.achieve_results),
            (Domain::DevelopCoalitions, self.develop_coalitions),
            (Domain::SystemsTransformation, self.systems_transformation),
        ]
    }

    /// The candidate's current scores with any given levels replacing the stored ones.
    pub(crate) fn apply_to(&self, current: &LeadsScoreSet) -> LeadsScoreSet {
        let mut scores = current.clone();
        for (domain, level) in self.overrides() {
            if let Some(level) = level.and_then(BehavioralLevel::new) {
                scores.get_mut(domain).behavioral_level = Rating::from(level);
            }
        }
        scores
    }
}

#[derive(Args, Debug)]
pub(crate) struct HistoryArgs {
    #[arg(value_parser = parse_candidate_id)]
    pub(crate) id: CandidateId,
    /// Months of trend to generate. Overrides LEADS_HISTORY_MONTHS.
    #[arg(long, value_parser = parse_months)]
    pub(crate) months: Option<u32>,
    /// Seed for reproducible jitter
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// individual, department, readiness, leads, or retention
    pub(crate) kind: ReportKind,
    /// Candidate for the individual report
    #[arg(long, value_parser = parse_candidate_id)]
    pub(crate) candidate: Option<CandidateId>,
    /// Limit the report to one department
    #[arg(long)]
    pub(crate) department: Option<String>,
    #[arg(long, default_value_t = ExportFormat::Csv)]
    pub(crate) format: ExportFormat,
    /// Write to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_candidates_list(session: &Session, args: ListArgs) -> Result<(), AppError> {
    let filter = CandidateFilter {
        search: args.search,
        department: args.department,
        readiness: args.readiness,
        risk: args.risk,
    };
    let candidates = session.service.list(&filter)?;

    if args.json {
        let views: Vec<_> = candidates.iter().map(Candidate::summary_view).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if candidates.is_empty() {
        println!("No candidates match the given filters");
        return Ok(());
    }

    println!("{} candidate(s)", candidates.len());
    for candidate in &candidates {
        let view = candidate.summary_view();
        println!(
            "- #{} {} | {} | {} | LEADS {}/{} | {} | risk {}",
            view.id,
            view.name,
            view.department,
            view.portfolio,
            view.total_leads_score,
            MAX_DISPLAY_TOTAL,
            or_dash(view.readiness_rating),
            or_dash(view.risk_of_loss.unwrap_or(""))
        );
    }
    Ok(())
}

pub(crate) fn run_candidates_show(session: &Session, args: ShowArgs) -> Result<(), AppError> {
    let candidate = session.service.get(args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidate)?);
        return Ok(());
    }

    render_profile(&candidate);

    println!("\nStored assessment");
    println!(
        "- Total {}/{} | {} | time to readiness {} | pathway {}",
        candidate.total_leads_score,
        MAX_DISPLAY_TOTAL,
        or_dash(candidate.readiness_label()),
        or_dash(&candidate.time_to_readiness),
        candidate
            .development_pathway
            .map(|pathway| pathway.label())
            .unwrap_or("-")
    );

    println!("\nLEADS domains");
    let framework = session.service.framework();
    for (domain, score) in candidate.leads_scores.iter() {
        let need = score
            .development_needed
            .map(|need| need.name())
            .unwrap_or("-");
        println!(
            "- {}: {} | development needed {}{}",
            framework.domain(domain).name,
            level_label(framework, &score.behavioral_level),
            need,
            if score.evidence.is_empty() {
                String::new()
            } else {
                format!(" | evidence: {}", score.evidence)
            }
        );
    }

    let outcome = session.service.preview_assessment(&candidate.leads_scores);
    println!("\nRecomputed from current scores");
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_assess(session: &Session, args: AssessArgs) -> Result<(), AppError> {
    let candidate = session.service.get(args.id)?;
    let scores = args.apply_to(&candidate.leads_scores);

    println!(
        "LEADS assessment for {} ({})",
        candidate.profile.name, candidate.profile.department
    );

    if args.dry_run {
        let outcome = session.service.preview_assessment(&scores);
        render_outcome(&outcome);
        println!("\nDry run: nothing stored");
        return Ok(());
    }

    let outcome = session.service.save_assessment(args.id, scores)?;
    render_outcome(&outcome);

    if session.persist()? {
        println!("\nSaved to {}", seed_label(session));
    } else {
        println!("\nStored for this run only (bundled dataset is read-only)");
    }
    Ok(())
}

pub(crate) fn run_history(session: &Session, args: HistoryArgs) -> Result<(), AppError> {
    let months = args.months.unwrap_or(session.config.data.history_months);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let candidate = session.service.get(args.id)?;
    let entries = session.service.history(args.id, months, today, &mut rng)?;

    println!(
        "Synthetic LEADS trend for {} ({} months, seed {})",
        candidate.profile.name, months, seed
    );
    render_history(session.service.framework(), &entries);
    Ok(())
}

pub(crate) fn run_dashboard(session: &Session) -> Result<(), AppError> {
    let candidates = session.service.all()?;
    render_dashboard(&dashboard_stats(&candidates));
    Ok(())
}

pub(crate) fn run_report(session: &Session, args: ReportArgs) -> Result<(), AppError> {
    let candidates = session.service.all()?;
    let request = ReportRequest {
        candidate: args.candidate,
        department: args.department,
    };
    let report = build_report(
        args.kind,
        &candidates,
        session.service.framework(),
        &request,
    )?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_report(&report, args.format, BufWriter::new(file))?;
            info!(
                kind = args.kind.slug(),
                rows = report.rows.len(),
                path = %path.display(),
                "report exported"
            );
            println!("{} report written to {}", args.kind, path.display());
        }
        None => write_report(&report, args.format, io::stdout().lock())?,
    }
    Ok(())
}

pub(crate) fn render_profile(candidate: &Candidate) {
    let profile = &candidate.profile;
    println!("{} (#{})", profile.name, candidate.id);
    println!("{} | {}", profile.department, profile.portfolio);
    if !profile.credentials.is_empty() {
        println!("Credentials: {}", profile.credentials.join(", "));
    }
    println!(
        "Service {} years | performance {} | potential {}",
        profile.length_of_service,
        profile
            .performance_rating
            .map(|rating| rating.label())
            .unwrap_or("-"),
        profile
            .potential_rating
            .map(|rating| rating.label())
            .unwrap_or("-")
    );
    if let Some(role) = profile.work_history.first() {
        println!("Current role: {} ({})", role.title, role.division);
    }
    println!(
        "Retention: impact of loss {} | risk of loss {}",
        profile
            .retention_profile
            .impact_of_loss
            .map(RiskLevel::label)
            .unwrap_or("-"),
        candidate.risk_of_loss().map(RiskLevel::label).unwrap_or("-")
    );
}

pub(crate) fn render_outcome(outcome: &AssessmentSummary) {
    let result = &outcome.result;
    println!(
        "- Total {}/{} ({:.0}% of scale) | average {:.2}",
        result.total_score,
        MAX_DISPLAY_TOTAL,
        result.progress_percent(),
        result.average_score
    );
    println!(
        "- Readiness {} | time to readiness {} | pathway {}",
        result.readiness_rating,
        or_dash(result.time_to_readiness),
        result
            .development_pathway
            .map(|pathway| pathway.label())
            .unwrap_or("-")
    );

    if outcome.recommendations.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations");
        for recommendation in &outcome.recommendations {
            println!(
                "- {} (level {}): {}",
                recommendation.domain, recommendation.current_level, recommendation.recommendation
            );
        }
    }
}

pub(crate) fn render_history(framework: &LeadsFramework, entries: &[HistoricalEntry]) {
    if entries.iter().all(|entry| entry.scores.is_empty()) {
        println!("No rated domains to trend");
        return;
    }

    for entry in entries {
        let scores: Vec<_> = entry
            .scores
            .iter()
            .map(|(domain, score)| format!("{} {:.2}", framework.domain(*domain).name, score))
            .collect();
        println!("- {} | {}", entry.date.format("%Y-%m"), scores.join(" | "));
    }
}

pub(crate) fn render_dashboard(stats: &DashboardStats) {
    println!("Succession dashboard");
    println!("- Candidates: {}", stats.total_candidates);
    println!(
        "- Ready now: {} ({}%)",
        stats.ready_candidates, stats.ready_percent
    );
    println!("- Developing: {}", stats.developing_candidates);
    println!("- High retention risk: {}", stats.high_risk);
}

fn level_label(framework: &LeadsFramework, rating: &Rating) -> String {
    match rating {
        Rating::Unset => "unset".to_string(),
        Rating::Valid(level) => match framework.scoring_level(level.get()) {
            Some(scoring) => format!("{} ({})", level, scoring.name),
            None => level.to_string(),
        },
        Rating::Invalid(raw) => format!("invalid '{raw}'"),
    }
}

fn seed_label(session: &Session) -> String {
    session
        .config
        .data
        .seed_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default()
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
