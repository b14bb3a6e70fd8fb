use crate::reports;
use clap::Args;
use pachislot::error::SimResult;
use pachislot::machines::{self, MachineProfile};
use pachislot::reel::Paytable;
use pachislot::simulation::export;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(short = 's', long, default_value_t = 6)]
    pub setting: usize,

    #[arg(short = 'n', long, default_value_t = 8000)]
    pub spins: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the spin sequence as CSV
    #[arg(long)]
    pub export_csv: Option<String>,
}

pub fn run(args: SimulateArgs, profile: &dyn MachineProfile, paytable: Paytable) -> SimResult<()> {
    let mut game = machines::build_game(profile, args.setting, paytable, args.seed)?;
    let results = game.simulate(args.spins);

    println!(
        "\n🎰 {} (設定{}) x {} spins",
        game.name(),
        args.setting,
        args.spins
    );

    let counts = game.count_results(&results);
    let summary = game.summarize(&results);
    reports::print_counts_report(&counts, &summary);

    reports::print_medal_summary(&summary);

    if let Some(path) = args.export_csv {
        export::export_spins(&path, &results)?;
        info!("📝 Exported {} spins to {}", results.len(), path);
    }
    Ok(())
}
