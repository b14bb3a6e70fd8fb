pub mod config;
pub mod error;
pub mod lottery;
pub mod machines;
pub mod reel;
pub mod simulation;
