use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::leads::DEFAULT_MONTHS_BACK;

/// Longest trend window the history command will generate.
pub const MAX_HISTORY_MONTHS: u32 = 120;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the navigator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("LEADS_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("LEADS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_path = env::var("LEADS_SEED_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let history_months = match env::var("LEADS_HISTORY_MONTHS") {
            Ok(raw) => parse_history_months(&raw)?,
            Err(_) => DEFAULT_MONTHS_BACK,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            data: DataConfig {
                seed_path,
                history_months,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where candidates come from and how far back trends reach.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// `None` selects the bundled dataset.
    pub seed_path: Option<PathBuf>,
    pub history_months: u32,
}

/// Accepts a month count in `1..=MAX_HISTORY_MONTHS`.
pub fn parse_history_months(raw: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidHistoryMonths {
        value: raw.to_string(),
    };
    let months = raw.trim().parse::<u32>().map_err(|_| invalid())?;
    if months == 0 || months > MAX_HISTORY_MONTHS {
        return Err(invalid());
    }
    Ok(months)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidHistoryMonths { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHistoryMonths { value } => write!(
                f,
                "LEADS_HISTORY_MONTHS must be between 1 and {MAX_HISTORY_MONTHS}, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
