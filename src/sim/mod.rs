//! Automated play: action policies and full-game playouts.
//!
//! Used by the property tests and the benchmark to drive seeded sessions to
//! completion, and by hosts that need a bot in an empty seat.

pub mod policy;
pub mod playout;

pub use policy::{ActionPolicy, GreedyPolicy, RandomPolicy};
pub use playout::{play_out, Playout};
