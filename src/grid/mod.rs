//! A player's personal card grid.
//!
//! Grids start as 3 rows × 4 columns. Rows never change; columns are only
//! ever removed, by column elimination.

pub mod layout;

pub use layout::{Grid, Position, COLUMNS, ROWS};
