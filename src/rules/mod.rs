//! Skyjo rules: turns, column elimination, end of round and scoring.
//!
//! The turn entry points (`draw`, `reveal`, `play_drawn_card`,
//! `discard_drawn_card`) are methods on `Session`. `RulesEngine` wraps them
//! behind the closed `Action` set and adds legal-action enumeration, which
//! is what the playout policies in `crate::sim` drive.

pub mod engine;
mod elimination;
mod end_of_round;
pub mod scoring;
mod turn;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{GameResult, RulesEngine, Skyjo};
pub use scoring::decide_result;
