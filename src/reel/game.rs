use super::accounting::{self, MedalSummary, OutcomeCounts};
use super::outcome::Outcome;
use super::paytable::Paytable;
use super::table::ProbabilityTable;
use crate::error::SimResult;
use crate::lottery::Lottery;
use fastrand::Rng;

/// Receives each outcome produced by `ReelGame::draw_with`.
pub trait SpinObserver {
    fn on_spin(&mut self, outcome: Outcome);
}

/// Prints the machine's reaction to every spin.
#[derive(Debug, Default, Clone, Copy)]
pub struct Announcer;

impl SpinObserver for Announcer {
    fn on_spin(&mut self, outcome: Outcome) {
        println!("{}", outcome.announcement());
    }
}

impl<F: FnMut(Outcome)> SpinObserver for F {
    fn on_spin(&mut self, outcome: Outcome) {
        self(outcome)
    }
}

/// A reel machine: an immutable odds table, its paytable and a generator.
pub struct ReelGame {
    name: String,
    table: ProbabilityTable,
    lottery: Lottery<Outcome>,
    paytable: Paytable,
    rng: Rng,
}

impl ReelGame {
    pub fn new(
        name: impl Into<String>,
        table: ProbabilityTable,
        paytable: Paytable,
        seed: Option<u64>,
    ) -> SimResult<Self> {
        let rng = if let Some(s) = seed {
            Rng::with_seed(s)
        } else {
            Rng::new()
        };
        paytable.validate()?;
        let lottery = table.to_lottery()?;

        Ok(Self {
            name: name.into(),
            table,
            lottery,
            paytable,
            rng,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }

    /// One spin, announced on stdout.
    pub fn draw(&mut self) -> Outcome {
        self.draw_with(&mut Announcer)
    }

    pub fn draw_with<O: SpinObserver + ?Sized>(&mut self, observer: &mut O) -> Outcome {
        let outcome = self.lottery.draw_one(&mut self.rng);
        observer.on_spin(outcome);
        outcome
    }

    /// `times` silent spins in the order they happened.
    pub fn simulate(&mut self, times: usize) -> Vec<Outcome> {
        self.lottery.draw_many(times, &mut self.rng)
    }

    pub fn count_results(&self, results: &[Outcome]) -> OutcomeCounts {
        OutcomeCounts::from_results(results)
    }

    pub fn count_medals_in(&self, results: &[Outcome]) -> u64 {
        accounting::medals_in(&self.count_results(results), &self.paytable)
    }

    pub fn count_medals_out(&self, results: &[Outcome]) -> u64 {
        accounting::medals_out(&self.count_results(results), &self.paytable)
    }

    /// Net medals: paid out minus put in.
    pub fn count_medals(&self, results: &[Outcome]) -> i64 {
        self.count_medals_out(results) as i64 - self.count_medals_in(results) as i64
    }

    pub fn summarize(&self, results: &[Outcome]) -> MedalSummary {
        MedalSummary::from_counts(&self.count_results(results), &self.paytable)
    }

    pub fn machine_rate(&self, results: &[Outcome]) -> Option<f64> {
        self.summarize(results).rate()
    }

    pub fn theoretical_rate(&self) -> Option<f64> {
        accounting::theoretical_rate(&self.table, &self.paytable)
    }
}
