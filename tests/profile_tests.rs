use pachislot::error::SimError;
use pachislot::machines::{build_game, GoGoJuggler, MachineKind, MachineProfile, Nameless};
use pachislot::reel::accounting::theoretical_rate;
use pachislot::reel::{Outcome, Paytable};
use rstest::rstest;
use strum::IntoEnumIterator;

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn test_table_sums_to_one(#[case] setting: usize) {
    let table = GoGoJuggler.create_table(setting).unwrap();
    assert!(
        (table.total() - 1.0).abs() < 1e-9,
        "setting {} sums to {}",
        setting,
        table.total()
    );
    assert!(table.get(Outcome::Miss) > 0.0);
}

#[rstest]
#[case(1, 182, 135)]
#[case(2, 183, 145)]
#[case(3, 184, 151)]
#[case(4, 187, 171)]
#[case(5, 191, 192)]
#[case(6, 200, 200)]
fn test_bonus_odds_per_setting(#[case] setting: usize, #[case] big: u32, #[case] reg: u32) {
    let table = GoGoJuggler.create_table(setting).unwrap();
    assert_eq!(table.get(Outcome::Big), big as f64 / 65536.0);
    assert_eq!(table.get(Outcome::Reg), reg as f64 / 65536.0);
}

#[test]
fn test_setting_six_beats_setting_one() {
    let low = GoGoJuggler.create_table(1).unwrap();
    let high = GoGoJuggler.create_table(6).unwrap();
    assert!(high.get(Outcome::Big) > low.get(Outcome::Big));
    assert_eq!(low.get(Outcome::Big), 182.0 / 65536.0);
    assert_eq!(high.get(Outcome::Big), 200.0 / 65536.0);
}

#[test]
fn test_theoretical_rate_rises_with_setting() {
    let paytable = Paytable::default();
    let rates: Vec<f64> = GoGoJuggler
        .settings()
        .map(|s| theoretical_rate(&GoGoJuggler.create_table(s).unwrap(), &paytable).unwrap())
        .collect();
    for pair in rates.windows(2) {
        assert!(pair[1] > pair[0], "rates not increasing: {:?}", rates);
    }
    // 163877 / 169674 and 184180 / 169674
    assert!((rates[0] - 0.96583).abs() < 1e-4, "setting 1: {}", rates[0]);
    assert!((rates[5] - 1.08549).abs() < 1e-4, "setting 6: {}", rates[5]);
}

#[rstest]
#[case(0)]
#[case(7)]
fn test_out_of_range_setting(#[case] setting: usize) {
    let res = build_game(&GoGoJuggler, setting, Paytable::default(), None);
    match res {
        Err(SimError::SettingOutOfRange { setting: s, min, max }) => {
            assert_eq!((s, min, max), (setting, 1, 6));
        }
        Err(e) => panic!("wrong error: {}", e),
        Ok(_) => panic!("setting {} should not build", setting),
    }
}

#[test]
fn test_nameless_is_uniform() {
    let table = Nameless.create_table(1).unwrap();
    for (_, p) in table.iter() {
        assert!((p - 0.1).abs() < 1e-12);
    }
}

#[test]
fn test_every_kind_builds_its_first_setting() {
    for kind in MachineKind::iter() {
        let profile = kind.profile();
        let start = *profile.settings().start();
        let game = build_game(profile, start, Paytable::default(), Some(0)).unwrap();
        assert_eq!(game.name(), profile.name());
    }
}
