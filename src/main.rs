use clap::{Parser, Subcommand};
use pachislot::config;
use pachislot::machines::MachineKind;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, value_enum, default_value_t = MachineKind::GogoJuggler)]
    machine: MachineKind,

    /// JSON file overriding the stake and payouts
    #[arg(global = true, short, long)]
    paytable: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Spin one at a time, announcing every result
    Spin(cmd::spin::SpinArgs),
    /// Spin in bulk and count medals
    Simulate(cmd::simulate::SimulateArgs),
    /// Estimate the machine rate by Monte Carlo
    Rate(cmd::rate::RateArgs),
    /// Print the odds table for a setting
    Table(cmd::table::TableArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    info!("🎰 pachislot v{}", env!("CARGO_PKG_VERSION"));

    let paytable = config::resolve_paytable(cli.paytable.as_deref()).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let profile = cli.machine.profile();
    info!("🃏 Machine: {} ({})", profile.name(), cli.machine);

    let result = match cli.command {
        Commands::Spin(args) => cmd::spin::run(args, profile, paytable),
        Commands::Simulate(args) => cmd::simulate::run(args, profile, paytable),
        Commands::Rate(args) => cmd::rate::run(args, profile, paytable),
        Commands::Table(args) => cmd::table::run(args, profile, &paytable),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
