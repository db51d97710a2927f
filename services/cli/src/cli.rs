use crate::commands::{
    run_assess, run_candidates_list, run_candidates_show, run_dashboard, run_history, run_report,
    AssessArgs, HistoryArgs, ListArgs, ReportArgs, ShowArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::Session;
use clap::{Args, Parser, Subcommand};
use leads_navigator::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "LEADS Navigator",
    about = "Score LEADS assessments and review succession readiness from the command line",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Candidate seed file (JSON). Overrides LEADS_SEED_PATH.
    #[arg(long, global = true)]
    pub(crate) seed_path: Option<PathBuf>,
    /// Log filter, e.g. `debug`. Overrides LEADS_LOG_LEVEL; RUST_LOG still wins.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse candidate records
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
    /// Score a candidate's LEADS assessment and store the result
    Assess(AssessArgs),
    /// Print a synthetic score trend for a candidate
    History(HistoryArgs),
    /// Print headline succession counts (default command)
    Dashboard,
    /// Export a succession report as CSV or JSON
    Report(ReportArgs),
    /// Walk through intake, assessment, history, and reporting on the seeded data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// List candidates, optionally filtered
    List(ListArgs),
    /// Show one candidate with its assessment and recommendations
    Show(ShowArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let session = Session::start(cli.global)?;

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Candidates {
            command: CandidatesCommand::List(args),
        } => run_candidates_list(&session, args),
        Command::Candidates {
            command: CandidatesCommand::Show(args),
        } => run_candidates_show(&session, args),
        Command::Assess(args) => run_assess(&session, args),
        Command::History(args) => run_history(&session, args),
        Command::Dashboard => run_dashboard(&session),
        Command::Report(args) => run_report(&session, args),
        Command::Demo(args) => run_demo(&session, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_assess_overrides() {
        let cli = Cli::try_parse_from([
            "leads-navigator",
            "assess",
            "4",
            "--lead-self",
            "5",
            "--systems-transformation",
            "2",
            "--dry-run",
        ])
        .expect("assess parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.id, leads_navigator::candidates::CandidateId(4));
                assert_eq!(args.lead_self, Some(5));
                assert_eq!(args.engage_others, None);
                assert_eq!(args.systems_transformation, Some(2));
                assert!(args.dry_run);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_levels_outside_scale() {
        let result = Cli::try_parse_from(["leads-navigator", "assess", "4", "--lead-self", "6"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "leads-navigator",
            "candidates",
            "list",
            "--readiness",
            "not ready",
            "--seed-path",
            "seed.json",
        ])
        .expect("list parses");

        assert_eq!(cli.global.seed_path, Some(PathBuf::from("seed.json")));
        assert!(matches!(
            cli.command,
            Some(Command::Candidates {
                command: CandidatesCommand::List(_)
            })
        ));
    }

    #[test]
    fn report_kind_and_format_parse() {
        let cli = Cli::try_parse_from([
            "leads-navigator",
            "report",
            "retention",
            "--format",
            "json",
        ])
        .expect("report parses");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.kind, leads_navigator::reports::ReportKind::Retention);
                assert_eq!(args.format, leads_navigator::reports::ExportFormat::Json);
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }
}
