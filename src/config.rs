use crate::error::SimResult;
use crate::reel::Paytable;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulationParams {
    /// Spins per trial
    #[arg(long, default_value_t = 8000)]
    pub spins: usize,

    /// Independent trials averaged into one rate
    #[arg(long, default_value_t = 100)]
    pub trials: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Worker threads for the trial loop (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            spins: 8000,
            trials: 100,
            seed: None,
            threads: None,
        }
    }
}

/// Loads the paytable from `path`, or the built-in payouts when none is given.
pub fn resolve_paytable(path: Option<&str>) -> SimResult<Paytable> {
    match path {
        Some(p) => {
            info!("💰 Loading Paytable from: {}", p);
            Paytable::load_from_file(p)
        }
        None => Ok(Paytable::default()),
    }
}
