use super::outcome::Outcome;
use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ceiling for the stake and every payout. Keeps medal totals far from `u64`
/// overflow for any spin count a simulation can reach.
pub const MAX_MEDALS: u64 = 1_000_000;

/// Medals charged per spin and paid per outcome.
///
/// REPLAY pays nothing here: its value is the refunded stake, which is
/// handled on the medals-in side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paytable {
    pub stake: u64,
    pub big: u64,
    pub reg: u64,
    pub cherry_big: u64,
    pub cherry_reg: u64,
    pub cherry: u64,
    pub grape: u64,
    pub replay: u64,
    pub pierrot: u64,
    pub bell: u64,
    pub miss: u64,
}

impl Default for Paytable {
    fn default() -> Self {
        Self {
            stake: 3,
            big: 309,
            reg: 101,
            cherry_big: 309,
            cherry_reg: 101,
            cherry: 1,
            grape: 7,
            replay: 0,
            pierrot: 10,
            bell: 15,
            miss: 0,
        }
    }
}

impl Paytable {
    pub fn payout(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Big => self.big,
            Outcome::Reg => self.reg,
            Outcome::CherryBig => self.cherry_big,
            Outcome::CherryReg => self.cherry_reg,
            Outcome::Cherry => self.cherry,
            Outcome::Grape => self.grape,
            Outcome::Replay => self.replay,
            Outcome::Pierrot => self.pierrot,
            Outcome::Bell => self.bell,
            Outcome::Miss => self.miss,
        }
    }

    fn fields(&self) -> [(&'static str, u64); 11] {
        [
            ("stake", self.stake),
            ("big", self.big),
            ("reg", self.reg),
            ("cherry_big", self.cherry_big),
            ("cherry_reg", self.cherry_reg),
            ("cherry", self.cherry),
            ("grape", self.grape),
            ("replay", self.replay),
            ("pierrot", self.pierrot),
            ("bell", self.bell),
            ("miss", self.miss),
        ]
    }

    pub fn validate(&self) -> SimResult<()> {
        for (name, value) in self.fields() {
            if value > MAX_MEDALS {
                return Err(SimError::Config(format!(
                    "paytable '{}' is {}, limit is {}",
                    name, value, MAX_MEDALS
                )));
            }
        }
        Ok(())
    }

    /// Missing fields fall back to the default payouts.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let path = path.as_ref();
        debug!("Loading paytable from {}", path.display());
        let content = fs::read_to_string(path)?;
        let table: Self = serde_json::from_str(&content)?;
        table.validate()?;
        Ok(table)
    }
}
