use super::{table_from_odds, MachineProfile, Odds};
use crate::error::SimResult;
use crate::reel::{Outcome, ProbabilityTable};

const SETTINGS: usize = 6;

// Numerators over 65536, one column per setting (1..=6).
const BIG: Odds<SETTINGS> = [182, 183, 184, 187, 191, 200];
const REG: Odds<SETTINGS> = [135, 145, 151, 171, 192, 200];
const CHERRY_BIG: Odds<SETTINGS> = [61, 61, 62, 65, 66, 70];
const CHERRY_REG: Odds<SETTINGS> = [45, 50, 55, 60, 65, 70];
const CHERRY: Odds<SETTINGS> = [1840; SETTINGS];
const GRAPE: Odds<SETTINGS> = [9610, 9690, 9770, 9850, 9930, 10020];
const REPLAY: Odds<SETTINGS> = [8978; SETTINGS];
const PIERROT: Odds<SETTINGS> = [60; SETTINGS];
const BELL: Odds<SETTINGS> = [60; SETTINGS];

const ODDS: [(Outcome, Odds<SETTINGS>); 9] = [
    (Outcome::Big, BIG),
    (Outcome::Reg, REG),
    (Outcome::CherryBig, CHERRY_BIG),
    (Outcome::CherryReg, CHERRY_REG),
    (Outcome::Cherry, CHERRY),
    (Outcome::Grape, GRAPE),
    (Outcome::Replay, REPLAY),
    (Outcome::Pierrot, PIERROT),
    (Outcome::Bell, BELL),
];

/// ゴーゴージャグラー.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoGoJuggler;

impl MachineProfile for GoGoJuggler {
    fn name(&self) -> &'static str {
        "ゴーゴージャグラー"
    }

    fn setting_count(&self) -> usize {
        SETTINGS
    }

    fn setting_table(&self, column: usize) -> SimResult<ProbabilityTable> {
        table_from_odds(ODDS.iter().map(|(o, row)| (*o, row[column])))
    }
}
