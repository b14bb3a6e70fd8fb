pub mod rate;
pub mod simulate;
pub mod spin;
pub mod table;
