//! Mapping between deck positions and the 4 x 13 display grid.
//!
//! Position `i` of the deck is drawn at row `i / 13`, column `i % 13`.
//! Rows follow the deck's flat order, so after a shuffle a row no longer
//! corresponds to a particular suit.

use crate::card::{Card, DECK_SIZE};

/// Number of grid rows.
pub const GRID_ROWS: usize = 4;

/// Number of grid columns.
pub const GRID_COLUMNS: usize = 13;

const _: () = assert!(GRID_ROWS * GRID_COLUMNS == DECK_SIZE);

/// A cell of the display grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub column: usize,
}

/// Returns the cell that displays deck position `index`.
///
/// Returns `None` if `index` is not below [`DECK_SIZE`].
#[must_use]
pub const fn cell_of(index: usize) -> Option<GridCell> {
    if index >= DECK_SIZE {
        return None;
    }
    Some(GridCell {
        row: index / GRID_COLUMNS,
        column: index % GRID_COLUMNS,
    })
}

/// Returns the deck position displayed in `cell`.
///
/// Returns `None` if the cell lies outside the grid.
#[must_use]
pub const fn index_of(cell: GridCell) -> Option<usize> {
    if cell.row >= GRID_ROWS || cell.column >= GRID_COLUMNS {
        return None;
    }
    Some(cell.row * GRID_COLUMNS + cell.column)
}

/// Splits a deck into its grid rows, top to bottom.
pub fn rows(cards: &[Card; DECK_SIZE]) -> impl Iterator<Item = &[Card]> {
    cards.chunks_exact(GRID_COLUMNS)
}
