use crate::reports;
use clap::Args;
use pachislot::config::SimulationParams;
use pachislot::error::SimResult;
use pachislot::machines::MachineProfile;
use pachislot::reel::Paytable;
use pachislot::simulation::{MonteCarlo, MonteCarloOptions};

#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    #[command(flatten)]
    pub params: SimulationParams,

    /// Only this setting (all settings otherwise)
    #[arg(short = 's', long)]
    pub setting: Option<usize>,

    /// Print the estimates as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RateArgs, profile: &dyn MachineProfile, paytable: Paytable) -> SimResult<()> {
    let mc = MonteCarlo::new(profile, paytable, MonteCarloOptions::from(&args.params));

    let estimates = match args.setting {
        Some(s) => vec![mc.run(s)?],
        None => mc.run_all()?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
    } else {
        reports::print_rate_report(&estimates);
    }
    Ok(())
}
