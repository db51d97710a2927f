use super::super::catalog::Domain;
use super::super::domain::LeadsScoreSet;

/// Running totals over the domains that carry a valid behavioral level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LevelTally {
    pub total: u32,
    pub count: u32,
}

impl LevelTally {
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| f64::from(self.total) / f64::from(self.count))
    }
}

pub(crate) fn tally_levels(scores: &LeadsScoreSet) -> LevelTally {
    Domain::ALL
        .into_iter()
        .map(|domain| scores.get(domain).behavioral_level.score())
        .filter(|score| *score > 0)
        .fold(LevelTally::default(), |tally, score| LevelTally {
            total: tally.total + u32::from(score),
            count: tally.count + 1,
        })
}
