use serde::Serialize;

use super::catalog::{Domain, LeadsFramework};
use super::domain::LeadsScoreSet;

/// Levels at or above this are advanced enough that no remedial step is suggested.
const ADVANCED_LEVEL: u8 = 4;
const EXPAND_LEVEL: u8 = 3;

/// Development step suggested for a domain rated below the advanced tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub domain: &'static str,
    pub current_level: u8,
    pub recommendation: &'static str,
}

/// Recommendation for one domain; `level` 0 means unset.
pub fn recommend(framework: &LeadsFramework, domain: Domain, level: u8) -> Option<Recommendation> {
    if level == 0 || level >= ADVANCED_LEVEL {
        return None;
    }

    let definition = framework.domain(domain);
    let recommendation = if level < EXPAND_LEVEL {
        definition.guidance.foundational
    } else {
        definition.guidance.expand
    };

    Some(Recommendation {
        domain: definition.name,
        current_level: level,
        recommendation,
    })
}

/// Recommendations for every rated domain below the advanced tier, in catalog order.
pub fn recommendations_for(
    framework: &LeadsFramework,
    scores: &LeadsScoreSet,
) -> Vec<Recommendation> {
    scores
        .iter()
        .filter_map(|(domain, score)| {
            recommend(framework, domain, score.behavioral_level.score())
        })
        .collect()
}
