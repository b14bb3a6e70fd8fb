pub mod gogo_juggler;

pub use self::gogo_juggler::GoGoJuggler;

use crate::error::{SimError, SimResult};
use crate::reel::{Outcome, Paytable, ProbabilityTable, ReelGame};
use clap::ValueEnum;
use std::ops::RangeInclusive;
use strum_macros::{Display, EnumIter};
use tracing::debug;

/// Every odds table is expressed as x/65536.
pub const ODDS_DENOMINATOR: u32 = 65536;

/// Per-setting numerators for one outcome.
pub type Odds<const N: usize> = [u32; N];

/// Converts numerators over `ODDS_DENOMINATOR` into a table, with MISS taking
/// the remainder.
pub fn table_from_odds<I>(odds: I) -> SimResult<ProbabilityTable>
where
    I: IntoIterator<Item = (Outcome, u32)>,
{
    let denom = ODDS_DENOMINATOR as f64;
    ProbabilityTable::with_miss_remainder(odds.into_iter().map(|(o, n)| (o, n as f64 / denom)))
}

/// A machine model: knows how its odds change with the setting.
pub trait MachineProfile: Send + Sync {
    fn name(&self) -> &'static str;

    /// Number of settings, numbered from 1.
    fn setting_count(&self) -> usize;

    /// Table for a zero-based column that is already known to be in range.
    fn setting_table(&self, column: usize) -> SimResult<ProbabilityTable>;

    fn settings(&self) -> RangeInclusive<usize> {
        1..=self.setting_count()
    }

    fn create_table(&self, setting: usize) -> SimResult<ProbabilityTable> {
        if !self.settings().contains(&setting) {
            return Err(SimError::SettingOutOfRange {
                setting,
                min: *self.settings().start(),
                max: *self.settings().end(),
            });
        }
        debug!("Building table for {} setting {}", self.name(), setting);
        self.setting_table(setting - 1)
    }
}

/// The nameless juggler has a single, uniform setting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nameless;

impl MachineProfile for Nameless {
    fn name(&self) -> &'static str {
        "名無しのジャグラー"
    }

    fn setting_count(&self) -> usize {
        1
    }

    fn setting_table(&self, _column: usize) -> SimResult<ProbabilityTable> {
        Ok(ProbabilityTable::uniform())
    }
}

/// Builds a playable game for `profile` at `setting`.
pub fn build_game(
    profile: &dyn MachineProfile,
    setting: usize,
    paytable: Paytable,
    seed: Option<u64>,
) -> SimResult<ReelGame> {
    let table = profile.create_table(setting)?;
    ReelGame::new(profile.name(), table, paytable, seed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumIter, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum MachineKind {
    GogoJuggler,
    Nameless,
}

impl MachineKind {
    pub fn profile(self) -> &'static dyn MachineProfile {
        match self {
            Self::GogoJuggler => &GoGoJuggler,
            Self::Nameless => &Nameless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_setting_is_an_error() {
        for bad in [0, 7, 100] {
            let res = GoGoJuggler.create_table(bad);
            assert!(matches!(
                res,
                Err(SimError::SettingOutOfRange { min: 1, max: 6, .. })
            ));
        }
    }

    #[test]
    fn test_nameless_only_has_setting_one() {
        assert!(Nameless.create_table(1).is_ok());
        assert!(Nameless.create_table(2).is_err());
    }
}
