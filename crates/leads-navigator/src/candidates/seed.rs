use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::domain::Candidate;

const BUNDLED_SEED: &str = include_str!("../../data/candidates.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed data is not a valid candidate list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Candidates shipped with the crate.
pub fn bundled_candidates() -> Result<Vec<Candidate>, SeedError> {
    parse_candidates(BUNDLED_SEED)
}

pub fn parse_candidates(raw: &str) -> Result<Vec<Candidate>, SeedError> {
    Ok(serde_json::from_str(raw)?)
}

/// Load the seed at `path`, or the bundled dataset when no path is configured.
pub fn load_candidates(path: Option<&Path>) -> Result<Vec<Candidate>, SeedError> {
    let Some(path) = path else {
        return bundled_candidates();
    };

    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = parse_candidates(&raw)?;
    debug!(path = %path.display(), count = candidates.len(), "loaded candidate seed");
    Ok(candidates)
}
