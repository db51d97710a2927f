//! LEADS capability framework: domain catalog, readiness scoring, trend history, and
//! development recommendations.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod history;
pub mod recommendations;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, DevelopmentNeed, Domain, DomainDefinition, LeadsFramework, ScoringLevel,
};
pub use domain::{BehavioralLevel, DomainScore, LeadsScoreSet, Rating};
pub use evaluation::{
    compute_readiness, DevelopmentPathway, ReadinessRating, ReadinessResult, MAX_DISPLAY_TOTAL,
};
pub use history::{generate_history, HistoricalEntry, HistoryIter, DEFAULT_MONTHS_BACK};
pub use recommendations::{recommend, recommendations_for, Recommendation};
