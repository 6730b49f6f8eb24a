//! A single cell of a ship.

use crate::common::Coordinate;

/// One grid cell belonging to a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    row: usize,
    column: usize,
    alive: bool,
}

impl Deck {
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Deck {
            row,
            column,
            alive: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn coordinate(&self) -> Coordinate {
        (self.row, self.column)
    }

    /// Returns `false` once the deck has been struck.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn strike(&mut self) {
        self.alive = false;
    }
}
