pub mod accounting;
pub mod game;
pub mod outcome;
pub mod paytable;
pub mod table;

pub use self::accounting::{MedalSummary, OutcomeCounts};
pub use self::game::{Announcer, ReelGame, SpinObserver};
pub use self::outcome::Outcome;
pub use self::paytable::Paytable;
pub use self::table::ProbabilityTable;
