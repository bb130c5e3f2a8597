//! Column elimination.
//!
//! A column whose three cards are face-up and equal leaves the grid. Its
//! cards go onto the discard pile top to bottom, columns in index order,
//! and the columns to its right shift left.

use smallvec::SmallVec;
use tracing::trace;

use crate::cards::{Card, DiscardPile};
use crate::grid::{Grid, COLUMNS, ROWS};

/// Remove every uniform column from `grid`, discarding its cards.
///
/// Returns `(column index before removal, shared value)` for each
/// eliminated column, in index order.
pub(crate) fn eliminate_columns(
    grid: &mut Grid,
    discard: &mut DiscardPile,
) -> SmallVec<[(usize, i8); COLUMNS]> {
    let uniform = grid.uniform_columns();
    if uniform.is_empty() {
        return SmallVec::new();
    }

    // Remove right to left so earlier indices stay valid.
    let mut removed: SmallVec<[(usize, [Card; ROWS]); COLUMNS]> = uniform
        .iter()
        .rev()
        .filter_map(|&col| grid.remove_column(col).map(|cards| (col, cards)))
        .collect();
    removed.reverse();

    removed
        .into_iter()
        .map(|(col, cards)| {
            for card in cards {
                discard.push(card);
            }
            let value = cards[0].value();
            trace!(column = col, value, "column eliminated");
            (col, value)
        })
        .collect()
}
