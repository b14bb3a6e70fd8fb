use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Every result a single spin can produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Big,
    Reg,
    CherryBig,
    CherryReg,
    Cherry,
    Grape,
    Replay,
    Pierrot,
    Bell,
    Miss,
}

impl Outcome {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bonus games (the lamp lights up).
    pub fn is_bonus(self) -> bool {
        matches!(
            self,
            Self::Big | Self::Reg | Self::CherryBig | Self::CherryReg
        )
    }

    /// What the machine shows when this outcome lands.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Big | Self::Reg => "ペカッ!",
            Self::CherryBig | Self::CherryReg => "チェリー(ペカッ!)",
            Self::Cherry => "チェリー",
            Self::Grape => "ブドウ",
            Self::Replay => "リプレイ",
            Self::Pierrot => "ピエロ",
            Self::Bell => "ベル",
            Self::Miss => "ハズレ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_labels_round_trip_through_text() {
        assert_eq!(Outcome::CherryBig.to_string(), "CHERRY_BIG");
        assert_eq!(Outcome::from_str("cherry_reg").unwrap(), Outcome::CherryReg);
        assert_eq!(Outcome::from_str("MISS").unwrap(), Outcome::Miss);
        assert!(Outcome::from_str("SEVEN").is_err());
    }

    #[test]
    fn test_index_matches_iteration_order() {
        assert_eq!(Outcome::COUNT, 10);
        for (i, o) in Outcome::iter().enumerate() {
            assert_eq!(o.index(), i);
        }
    }

    #[rstest]
    #[case(Outcome::Big, "ペカッ!")]
    #[case(Outcome::Reg, "ペカッ!")]
    #[case(Outcome::CherryBig, "チェリー(ペカッ!)")]
    #[case(Outcome::CherryReg, "チェリー(ペカッ!)")]
    #[case(Outcome::Cherry, "チェリー")]
    #[case(Outcome::Grape, "ブドウ")]
    #[case(Outcome::Replay, "リプレイ")]
    #[case(Outcome::Pierrot, "ピエロ")]
    #[case(Outcome::Bell, "ベル")]
    #[case(Outcome::Miss, "ハズレ")]
    fn test_announcement_text(#[case] outcome: Outcome, #[case] expected: &str) {
        assert_eq!(outcome.announcement(), expected);
    }
}
