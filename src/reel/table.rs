use super::outcome::Outcome;
use crate::error::{SimError, SimResult};
use crate::lottery::{validate_table, Lottery};
use serde::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};

/// Probability of every outcome on one spin. Always complete: outcomes that
/// were never given a value hold 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    probs: [f64; Outcome::COUNT],
}

impl ProbabilityTable {
    /// Builds a table from explicit entries. The entries must already sum to 1.
    pub fn new<I>(entries: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (Outcome, f64)>,
    {
        let probs = collect_entries(entries, false)?;
        let table = Self { probs };
        validate_table(table.iter())?;
        Ok(table)
    }

    /// Builds a table where MISS takes whatever probability the other entries
    /// leave over. Any MISS value in `entries` is ignored.
    pub fn with_miss_remainder<I>(entries: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (Outcome, f64)>,
    {
        let mut probs = collect_entries(entries, true)?;
        let hit: f64 = probs.iter().sum();
        probs[Outcome::Miss.index()] = 1.0 - hit;
        let table = Self { probs };
        validate_table(table.iter())?;
        Ok(table)
    }

    /// Equal weight on all ten outcomes.
    pub fn uniform() -> Self {
        Self {
            probs: [1.0 / Outcome::COUNT as f64; Outcome::COUNT],
        }
    }

    #[inline(always)]
    pub fn get(&self, outcome: Outcome) -> f64 {
        self.probs[outcome.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        Outcome::iter().map(move |o| (o, self.probs[o.index()]))
    }

    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    pub fn to_lottery(&self) -> SimResult<Lottery<Outcome>> {
        Lottery::new(self.iter())
    }
}

fn collect_entries<I>(entries: I, skip_miss: bool) -> SimResult<[f64; Outcome::COUNT]>
where
    I: IntoIterator<Item = (Outcome, f64)>,
{
    let mut probs = [0.0; Outcome::COUNT];
    let mut seen = [false; Outcome::COUNT];
    for (outcome, p) in entries {
        if skip_miss && outcome == Outcome::Miss {
            continue;
        }
        if std::mem::replace(&mut seen[outcome.index()], true) {
            return Err(SimError::DuplicateLabel {
                label: outcome.to_string(),
            });
        }
        probs[outcome.index()] = p;
    }
    Ok(probs)
}

impl Serialize for ProbabilityTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
