use super::outcome::Outcome;
use super::paytable::Paytable;
use super::table::ProbabilityTable;
use serde::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};

/// How many times each outcome appeared. Every outcome has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    counts: [u64; Outcome::COUNT],
}

impl OutcomeCounts {
    pub fn from_results(results: &[Outcome]) -> Self {
        let mut counts = [0u64; Outcome::COUNT];
        for o in results {
            counts[o.index()] += 1;
        }
        Self { counts }
    }

    #[inline(always)]
    pub fn get(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u64)> + '_ {
        Outcome::iter().map(move |o| (o, self.counts[o.index()]))
    }

    pub fn merge(&mut self, other: &OutcomeCounts) {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
    }
}

impl Serialize for OutcomeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Medal flow for a batch of spins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalSummary {
    pub spins: u64,
    pub medals_in: u64,
    pub medals_out: u64,
}

impl MedalSummary {
    pub fn from_counts(counts: &OutcomeCounts, paytable: &Paytable) -> Self {
        Self {
            spins: counts.total(),
            medals_in: medals_in(counts, paytable),
            medals_out: medals_out(counts, paytable),
        }
    }

    pub fn net(&self) -> i64 {
        self.medals_out as i64 - self.medals_in as i64
    }

    /// Medals out over medals in. `None` when nothing was staked.
    pub fn rate(&self) -> Option<f64> {
        if self.medals_in == 0 {
            None
        } else {
            Some(self.medals_out as f64 / self.medals_in as f64)
        }
    }
}

/// Stake for every spin, minus the stake refunded by each REPLAY.
/// Saturates at `u64::MAX` for paytables that fail `Paytable::validate`.
pub fn medals_in(counts: &OutcomeCounts, paytable: &Paytable) -> u64 {
    let staked = counts.total() - counts.get(Outcome::Replay);
    paytable.stake.saturating_mul(staked)
}

pub fn medals_out(counts: &OutcomeCounts, paytable: &Paytable) -> u64 {
    counts.iter().fold(0u64, |acc, (o, n)| {
        acc.saturating_add(n.saturating_mul(paytable.payout(o)))
    })
}

/// Long-run medals out per medal in, straight from the odds. `None` when a
/// spin stakes nothing on average.
pub fn theoretical_rate(table: &ProbabilityTable, paytable: &Paytable) -> Option<f64> {
    let expected_out: f64 = table
        .iter()
        .map(|(o, p)| p * paytable.payout(o) as f64)
        .sum();
    let expected_in = paytable.stake as f64 * (1.0 - table.get(Outcome::Replay));
    if expected_in > 0.0 {
        Some(expected_out / expected_in)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_are_all_zero() {
        let counts = OutcomeCounts::from_results(&[]);
        let pt = Paytable::default();
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.iter().count(), Outcome::COUNT);
        assert_eq!(medals_in(&counts, &pt), 0);
        assert_eq!(medals_out(&counts, &pt), 0);
        assert_eq!(MedalSummary::from_counts(&counts, &pt).rate(), None);
    }

    #[test]
    fn test_replay_refunds_stake() {
        let counts = OutcomeCounts::from_results(&[Outcome::Replay, Outcome::Miss, Outcome::Replay]);
        let pt = Paytable::default();
        assert_eq!(medals_in(&counts, &pt), 3);
        assert_eq!(medals_out(&counts, &pt), 0);
    }

    #[test]
    fn test_mixed_payout() {
        let results = [Outcome::Big, Outcome::Grape, Outcome::Grape, Outcome::Bell, Outcome::Miss];
        let summary = MedalSummary::from_counts(&OutcomeCounts::from_results(&results), &Paytable::default());
        assert_eq!(summary.medals_in, 15);
        assert_eq!(summary.medals_out, 309 + 14 + 15);
        assert_eq!(summary.net(), 338 - 15);
    }

    #[test]
    fn test_unvalidated_paytable_saturates() {
        let pt = Paytable {
            big: u64::MAX,
            ..Paytable::default()
        };
        let counts = OutcomeCounts::from_results(&[Outcome::Big, Outcome::Big]);
        assert_eq!(medals_out(&counts, &pt), u64::MAX);
    }

    #[test]
    fn test_theoretical_rate_needs_a_stake() {
        let free = Paytable {
            stake: 0,
            ..Paytable::default()
        };
        assert_eq!(theoretical_rate(&ProbabilityTable::uniform(), &free), None);

        let all_replay =
            ProbabilityTable::new([(Outcome::Replay, 1.0)]).unwrap();
        assert_eq!(theoretical_rate(&all_replay, &Paytable::default()), None);
        assert!(theoretical_rate(&ProbabilityTable::uniform(), &Paytable::default()).is_some());
    }
}
