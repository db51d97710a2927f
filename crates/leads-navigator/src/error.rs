use crate::candidates::{CandidateServiceError, RepositoryError, SeedError};
use crate::config::ConfigError;
use crate::reports::ReportError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Seed(SeedError),
    Repository(RepositoryError),
    Candidates(CandidateServiceError),
    Report(ReportError),
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Seed(err) => write!(f, "seed error: {}", err),
            AppError::Repository(err) => write!(f, "repository error: {}", err),
            AppError::Candidates(err) => write!(f, "candidate error: {}", err),
            AppError::Report(err) => write!(f, "report error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Seed(err) => Some(err),
            AppError::Repository(err) => Some(err),
            AppError::Candidates(err) => Some(err),
            AppError::Report(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SeedError> for AppError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}

impl From<CandidateServiceError> for AppError {
    fn from(value: CandidateServiceError) -> Self {
        Self::Candidates(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
