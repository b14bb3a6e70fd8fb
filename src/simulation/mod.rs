pub mod export;
pub mod runner;

pub use self::runner::{MonteCarlo, MonteCarloOptions, RateEstimate};
