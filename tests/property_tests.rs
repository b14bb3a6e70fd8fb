use fastrand::Rng;
use pachislot::lottery::Lottery;
use pachislot::reel::{MedalSummary, Outcome, OutcomeCounts, Paytable, ProbabilityTable};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    (0..10usize).prop_map(|i| Outcome::iter().nth(i).unwrap())
}

prop_compose! {
    // Raw weights normalised into a probability vector over all ten outcomes.
    fn arb_table()(weights in proptest::collection::vec(0.0..100.0f64, 10)) -> Vec<(Outcome, f64)> {
        let total: f64 = weights.iter().sum::<f64>() + 1.0;
        let mut probs: Vec<(Outcome, f64)> = Outcome::iter()
            .zip(weights.iter())
            .map(|(o, w)| (o, w / total))
            .collect();
        // MISS takes the remainder so the table always balances
        let hit: f64 = probs.iter().filter(|(o, _)| *o != Outcome::Miss).map(|(_, p)| p).sum();
        if let Some(miss) = probs.iter_mut().find(|(o, _)| *o == Outcome::Miss) {
            miss.1 = 1.0 - hit;
        }
        probs
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_counts_sum_to_draws(entries in arb_table(), n in 0usize..2000, seed in any::<u64>()) {
        let table = ProbabilityTable::new(entries).unwrap();
        let lottery = table.to_lottery().unwrap();
        let draws = lottery.draw_many(n, &mut Rng::with_seed(seed));
        let counts = OutcomeCounts::from_results(&draws);
        prop_assert_eq!(counts.total(), n as u64);
    }

    #[test]
    fn test_zero_probability_never_drawn(entries in arb_table(), seed in any::<u64>()) {
        let mut entries = entries;
        let moved = entries[0].1;
        entries[0].1 = 0.0;
        entries[9].1 += moved;
        let lottery = Lottery::new(entries).unwrap();
        let draws = lottery.draw_many(500, &mut Rng::with_seed(seed));
        prop_assert!(draws.iter().all(|&o| o != Outcome::Big));
    }

    #[test]
    fn test_medal_identities(results in proptest::collection::vec(arb_outcome(), 0..500)) {
        let paytable = Paytable::default();
        let counts = OutcomeCounts::from_results(&results);
        let summary = MedalSummary::from_counts(&counts, &paytable);
        let replays = results.iter().filter(|&&o| o == Outcome::Replay).count() as u64;

        prop_assert_eq!(summary.spins, results.len() as u64);
        prop_assert_eq!(summary.medals_in, 3 * (results.len() as u64 - replays));
        prop_assert_eq!(summary.net(), summary.medals_out as i64 - summary.medals_in as i64);
    }

    #[test]
    fn test_merge_matches_concatenation(
        a in proptest::collection::vec(arb_outcome(), 0..200),
        b in proptest::collection::vec(arb_outcome(), 0..200)
    ) {
        let mut merged = OutcomeCounts::from_results(&a);
        merged.merge(&OutcomeCounts::from_results(&b));
        let joined: Vec<Outcome> = a.iter().chain(b.iter()).copied().collect();
        prop_assert_eq!(merged, OutcomeCounts::from_results(&joined));
    }
}
