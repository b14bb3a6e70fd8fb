use crate::reports;
use clap::Args;
use pachislot::error::SimResult;
use pachislot::machines::{self, MachineProfile};
use pachislot::reel::Paytable;

#[derive(Args, Debug, Clone)]
pub struct SpinArgs {
    #[arg(short = 's', long, default_value_t = 6)]
    pub setting: usize,

    #[arg(short = 'n', long, default_value_t = 1)]
    pub spins: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: SpinArgs, profile: &dyn MachineProfile, paytable: Paytable) -> SimResult<()> {
    let mut game = machines::build_game(profile, args.setting, paytable, args.seed)?;

    println!("\n🎰 {} (設定{})", game.name(), args.setting);
    let results: Vec<_> = (0..args.spins).map(|_| game.draw()).collect();

    let summary = game.summarize(&results);
    if args.spins > 1 {
        reports::print_counts_report(&game.count_results(&results), &summary);
    }
    reports::print_medal_summary(&summary);
    Ok(())
}
