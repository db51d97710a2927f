use crate::cli::GlobalArgs;
use chrono::NaiveDate;
use leads_navigator::candidates::{
    load_candidates, CandidateId, CandidateRepository, CandidateService,
    InMemoryCandidateRepository,
};
use leads_navigator::config::{parse_history_months, AppConfig};
use leads_navigator::error::AppError;
use leads_navigator::leads::LeadsFramework;
use leads_navigator::telemetry;
use std::fs;
use std::sync::Arc;
use tracing::{info, warn};

/// Loaded configuration plus a service over the seeded candidate store.
pub(crate) struct Session {
    pub(crate) config: AppConfig,
    pub(crate) repository: Arc<InMemoryCandidateRepository>,
    pub(crate) service: CandidateService<InMemoryCandidateRepository>,
}

impl Session {
    pub(crate) fn start(mut args: GlobalArgs) -> Result<Self, AppError> {
        let mut config = AppConfig::load()?;

        if let Some(path) = args.seed_path.take() {
            config.data.seed_path = Some(path);
        }
        if let Some(level) = args.log_level.take() {
            config.telemetry.log_level = level;
        }

        telemetry::init(&config.telemetry)?;

        let candidates = load_candidates(config.data.seed_path.as_deref())?;
        info!(
            count = candidates.len(),
            environment = ?config.environment,
            "candidate store ready"
        );
        let repository = Arc::new(InMemoryCandidateRepository::seeded(candidates)?);
        let service = CandidateService::new(repository.clone(), LeadsFramework::standard());

        Ok(Self {
            config,
            repository,
            service,
        })
    }

    /// Write the store back to the configured seed file. The bundled dataset is read-only,
    /// so changes made against it only last for the current run.
    pub(crate) fn persist(&self) -> Result<bool, AppError> {
        let Some(path) = self.config.data.seed_path.as_deref() else {
            warn!("no seed path configured; changes are not persisted");
            return Ok(false);
        };

        let candidates = self.repository.list()?;
        let json = serde_json::to_string_pretty(&candidates)?;
        fs::write(path, json)?;
        info!(path = %path.display(), count = candidates.len(), "candidate store saved");
        Ok(true)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_candidate_id(raw: &str) -> Result<CandidateId, String> {
    raw.trim()
        .parse::<u64>()
        .map(CandidateId)
        .map_err(|_| format!("'{raw}' is not a candidate id"))
}

pub(crate) fn parse_months(raw: &str) -> Result<u32, String> {
    parse_history_months(raw).map_err(|_| {
        format!(
            "'{raw}' is not a month count between 1 and {}",
            leads_navigator::config::MAX_HISTORY_MONTHS
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_values() {
        assert_eq!(parse_candidate_id(" 12 "), Ok(CandidateId(12)));
        assert!(parse_candidate_id("twelve").is_err());
        assert_eq!(parse_months("6"), Ok(6));
        assert!(parse_months("0").is_err());
        assert_eq!(
            parse_date("2025-02-28"),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 28).expect("valid date"))
        );
        assert!(parse_date("28/02/2025").is_err());
    }
}
