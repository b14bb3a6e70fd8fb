use crate::config::SimulationParams;
use crate::error::{SimError, SimResult};
use crate::machines::MachineProfile;
use crate::reel::accounting::theoretical_rate;
use crate::reel::{MedalSummary, OutcomeCounts, Paytable, ReelGame};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct MonteCarloOptions {
    pub spins_per_trial: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    pub num_threads: Option<usize>,
}

impl From<&SimulationParams> for MonteCarloOptions {
    fn from(params: &SimulationParams) -> Self {
        Self {
            spins_per_trial: params.spins,
            trials: params.trials,
            seed: params.seed,
            num_threads: params.threads,
        }
    }
}

impl Default for MonteCarloOptions {
    fn default() -> Self {
        Self::from(&SimulationParams::default())
    }
}

/// Averaged machine rate for one setting.
#[derive(Debug, Clone, Serialize)]
pub struct RateEstimate {
    pub machine: String,
    pub setting: usize,
    pub trials: usize,
    pub spins_per_trial: usize,
    pub mean_rate: f64,
    pub std_dev: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub theoretical_rate: Option<f64>,
    pub totals: MedalSummary,
    pub counts: OutcomeCounts,
}

struct TrialOutcome {
    counts: OutcomeCounts,
    summary: MedalSummary,
}

pub struct MonteCarlo<'a> {
    profile: &'a dyn MachineProfile,
    paytable: Paytable,
    options: MonteCarloOptions,
}

impl<'a> MonteCarlo<'a> {
    pub fn new(
        profile: &'a dyn MachineProfile,
        paytable: Paytable,
        options: MonteCarloOptions,
    ) -> Self {
        Self {
            profile,
            paytable,
            options,
        }
    }

    /// Runs every trial for `setting` and averages the per-trial rates.
    ///
    /// Trial `i` is seeded with `seed + i`, so the estimate does not depend on
    /// how many threads run it.
    pub fn run(&self, setting: usize) -> SimResult<RateEstimate> {
        match self.options.num_threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(e.to_string()))?;
                pool.install(|| self.run_trials(setting))
            }
            None => self.run_trials(setting),
        }
    }

    /// One estimate per setting, lowest first.
    pub fn run_all(&self) -> SimResult<Vec<RateEstimate>> {
        self.profile.settings().map(|s| self.run(s)).collect()
    }

    fn run_trials(&self, setting: usize) -> SimResult<RateEstimate> {
        let opts = &self.options;
        let table = self.profile.create_table(setting)?;
        let start = Instant::now();

        let trials: Vec<TrialOutcome> = (0..opts.trials)
            .into_par_iter()
            .map(|i| -> SimResult<TrialOutcome> {
                let trial_seed = opts.seed.map(|s| s.wrapping_add(i as u64));
                let mut game = ReelGame::new(
                    self.profile.name(),
                    table.clone(),
                    self.paytable.clone(),
                    trial_seed,
                )?;
                let results = game.simulate(opts.spins_per_trial);
                let counts = game.count_results(&results);
                let summary = MedalSummary::from_counts(&counts, &self.paytable);
                Ok(TrialOutcome { counts, summary })
            })
            .collect::<SimResult<_>>()?;

        let mut counts = OutcomeCounts::default();
        let mut totals = MedalSummary::default();
        let mut rates = Vec::with_capacity(trials.len());

        for (i, t) in trials.iter().enumerate() {
            counts.merge(&t.counts);
            totals.spins += t.summary.spins;
            totals.medals_in += t.summary.medals_in;
            totals.medals_out += t.summary.medals_out;
            match t.summary.rate() {
                Some(r) => rates.push(r),
                None => warn!("Trial {} staked no medals; left out of the average", i),
            }
        }

        let (mean_rate, std_dev) = mean_and_std_dev(&rates);
        let min_rate = rates.iter().copied().fold(f64::INFINITY, f64::min);
        let max_rate = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        debug!(
            "Setting {}: {} trials in {:.2?}",
            setting,
            trials.len(),
            start.elapsed()
        );
        info!(
            "{} setting {}: rate {:.2}% over {}x{} spins",
            self.profile.name(),
            setting,
            mean_rate * 100.0,
            opts.spins_per_trial,
            opts.trials
        );

        Ok(RateEstimate {
            machine: self.profile.name().to_string(),
            setting,
            trials: opts.trials,
            spins_per_trial: opts.spins_per_trial,
            mean_rate,
            std_dev,
            min_rate: if rates.is_empty() { 0.0 } else { min_rate },
            max_rate: if rates.is_empty() { 0.0 } else { max_rate },
            theoretical_rate: theoretical_rate(&table, &self.paytable),
            totals,
            counts,
        })
    }
}

/// Sample standard deviation; zero for fewer than two values.
fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}
