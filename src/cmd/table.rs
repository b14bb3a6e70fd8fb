use crate::reports;
use clap::Args;
use pachislot::error::SimResult;
use pachislot::machines::MachineProfile;
use pachislot::reel::Paytable;

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Only this setting (all settings otherwise)
    #[arg(short = 's', long)]
    pub setting: Option<usize>,
}

pub fn run(args: TableArgs, profile: &dyn MachineProfile, paytable: &Paytable) -> SimResult<()> {
    let settings: Vec<usize> = match args.setting {
        Some(s) => vec![s],
        None => profile.settings().collect(),
    };

    for setting in settings {
        let table = profile.create_table(setting)?;
        reports::print_probability_table(profile.name(), setting, &table, paytable);
    }
    Ok(())
}
