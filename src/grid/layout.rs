//! Grid storage and the per-cell operations.
//!
//! Cards are stored column-major (`Vec<[Card; ROWS]>`) so removing a column
//! is a single `Vec::remove` and the cells to its right shift left.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Deck};
use crate::core::InitialReveal;
use crate::error::GameError;

/// Number of rows in every grid.
pub const ROWS: usize = 3;

/// Number of columns in a freshly dealt grid.
pub const COLUMNS: usize = 4;

/// Zero-based `(row, col)` coordinate inside a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One player's cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    columns: Vec<[Card; ROWS]>,
}

impl Grid {
    /// Deal a full grid off the top of the deck.
    ///
    /// Cards fill the grid row by row. Fails with `EmptyCardPool` (without
    /// touching the deck) if fewer than `ROWS * COLUMNS` cards remain.
    pub fn deal(deck: &mut Deck, initial_reveal: InitialReveal) -> Result<Self, GameError> {
        if deck.len() < ROWS * COLUMNS {
            return Err(GameError::EmptyCardPool);
        }

        let mut columns = vec![[Card::new(0); ROWS]; COLUMNS];
        for row in 0..ROWS {
            for column in columns.iter_mut() {
                column[row] = deck.draw().ok_or(GameError::EmptyCardPool)?;
            }
        }

        let mut grid = Self { columns };
        for pos in initial_reveal.positions() {
            if let Some(card) = grid.cell_mut(*pos) {
                card.flip();
            }
        }
        Ok(grid)
    }

    /// Build a grid from explicit columns (top card first).
    #[must_use]
    pub fn from_columns(columns: Vec<[Card; ROWS]>) -> Self {
        Self { columns }
    }

    /// Number of columns still in play.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of cards in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len() * ROWS
    }

    /// Has every column been eliminated?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The card at a position, if it is inside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Card> {
        self.columns.get(pos.col).and_then(|c| c.get(pos.row)).copied()
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Card> {
        self.columns.get_mut(pos.col).and_then(|c| c.get_mut(pos.row))
    }

    /// Turn a face-down card face-up and return it.
    pub fn reveal(&mut self, pos: Position) -> Result<Card, GameError> {
        let card = self.cell_mut(pos).ok_or(GameError::InvalidPosition(pos))?;
        if card.is_face_up() {
            return Err(GameError::AlreadyRevealed(pos));
        }
        card.flip();
        Ok(*card)
    }

    /// Put `card` face-up at `pos` and return the card it displaced.
    pub fn replace(&mut self, pos: Position, mut card: Card) -> Result<Card, GameError> {
        let cell = self.cell_mut(pos).ok_or(GameError::InvalidPosition(pos))?;
        card.flip();
        Ok(std::mem::replace(cell, card))
    }

    /// Sum of every card in the grid, face-up or not.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.cards().map(|c| i32::from(c.value())).sum()
    }

    /// Sum of the face-up cards only (what opponents can see).
    #[must_use]
    pub fn visible_score(&self) -> i32 {
        self.cards()
            .filter(|c| c.is_face_up())
            .map(|c| i32::from(c.value()))
            .sum()
    }

    /// Is every remaining card face-up? True for an empty grid.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.cards().all(|c| c.is_face_up())
    }

    /// Positions of face-down cards, row by row.
    pub fn hidden_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.get(p).is_some_and(|c| !c.is_face_up()))
    }

    /// Every position in the grid, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.columns.len();
        (0..ROWS).flat_map(move |row| (0..columns).map(move |col| Position::new(row, col)))
    }

    /// Columns whose cards are all face-up and share one value.
    #[must_use]
    pub fn uniform_columns(&self) -> SmallVec<[usize; COLUMNS]> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| {
                column.iter().all(|c| c.is_face_up())
                    && column.iter().all(|c| c.value() == column[0].value())
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove a column, returning its cards top to bottom.
    pub(crate) fn remove_column(&mut self, col: usize) -> Option<[Card; ROWS]> {
        (col < self.columns.len()).then(|| self.columns.remove(col))
    }

    /// All cards, column by column.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flatten()
    }

    /// Cards laid out row by row, for display.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Card>> {
        (0..ROWS)
            .map(|row| self.columns.iter().map(|column| column[row]).collect())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
