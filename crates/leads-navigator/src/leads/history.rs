//! Synthetic score history for trend charts.
//!
//! Entries are interpolated from a lower starting point up to the candidate's current levels
//! with a little jitter. They are not a record of real past assessments.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;
use serde::Serialize;

use super::catalog::Domain;
use super::domain::LeadsScoreSet;

pub const DEFAULT_MONTHS_BACK: u32 = 12;

const JITTER: f64 = 0.15;
const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 5.0;

/// One month of synthetic trend data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalEntry {
    pub date: NaiveDate,
    pub scores: BTreeMap<Domain, f64>,
}

/// Lazily yields `months_back` entries, oldest first, ending at the month of `today`.
/// Months before the earliest representable date are pinned to `NaiveDate::MIN`.
pub fn generate_history<'r, R>(
    current: &LeadsScoreSet,
    months_back: u32,
    today: NaiveDate,
    rng: &'r mut R,
) -> HistoryIter<'r, R>
where
    R: Rng + ?Sized,
{
    let levels = current
        .iter()
        .filter_map(|(domain, score)| {
            score
                .behavioral_level
                .level()
                .map(|level| (domain, f64::from(level.get())))
        })
        .collect();

    HistoryIter {
        levels,
        anchor: today.with_day(1).unwrap_or(today),
        months_back,
        next_index: 0,
        rng,
    }
}

pub struct HistoryIter<'r, R: ?Sized> {
    levels: Vec<(Domain, f64)>,
    anchor: NaiveDate,
    months_back: u32,
    next_index: u32,
    rng: &'r mut R,
}

impl<R> Iterator for HistoryIter<'_, R>
where
    R: Rng + ?Sized,
{
    type Item = HistoricalEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.months_back {
            return None;
        }

        let months_remaining = self.months_back - 1 - self.next_index;
        self.next_index += 1;

        let date = self
            .anchor
            .checked_sub_months(Months::new(months_remaining))
            .unwrap_or(NaiveDate::MIN);
        let progress =
            f64::from(self.months_back - months_remaining) / f64::from(self.months_back);

        let mut scores = BTreeMap::new();
        for (domain, level) in &self.levels {
            let base = (level - 2.0).max(MIN_SCORE);
            let interpolated = base + (level - base) * progress;
            let jitter = self.rng.gen_range(-JITTER..=JITTER);
            scores.insert(*domain, (interpolated + jitter).clamp(MIN_SCORE, MAX_SCORE));
        }

        Some(HistoricalEntry { date, scores })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.months_back - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl<R> ExactSizeIterator for HistoryIter<'_, R> where R: Rng + ?Sized {}
