//! Ship classes and placed ships built from a pair of endpoints.

use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::{Coordinate, ValidationError};
use crate::config::BOARD_SIZE;
use crate::deck::Deck;

/// Occupancy mask sized for the standard board.
pub type FleetMask = BitBoard<u128, BOARD_SIZE>;

/// Orientation of a ship on the board. Single-deck ships report `Horizontal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A class of ship in the fleet: its name, deck length, and how many the
/// fleet must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in a legal fleet.
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// A straight run of decks between two endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    start: Coordinate,
    end: Coordinate,
    orientation: Orientation,
    decks: Vec<Deck>,
    mask: FleetMask,
    sunk: bool,
}

impl Ship {
    /// Build a ship covering every cell from `start` to `end` inclusive.
    ///
    /// Endpoints must be on the board and share a row or a column. Reversed
    /// endpoints are accepted and swapped, so decks always run in increasing
    /// coordinate order.
    pub fn new(start: Coordinate, end: Coordinate) -> Result<Self, ValidationError> {
        for &(row, col) in &[start, end] {
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return Err(ValidationError::OutOfBounds { row, col });
            }
        }
        let orientation = if start.0 == end.0 {
            Orientation::Horizontal
        } else if start.1 == end.1 {
            Orientation::Vertical
        } else {
            return Err(ValidationError::Misaligned { start, end });
        };
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };

        let decks: Vec<Deck> = match orientation {
            Orientation::Horizontal => (start.1..=end.1)
                .map(|col| Deck::new(start.0, col))
                .collect(),
            Orientation::Vertical => (start.0..=end.0)
                .map(|row| Deck::new(row, start.1))
                .collect(),
        };
        let mask = FleetMask::from_iter(decks.iter().map(Deck::coordinate))?;

        Ok(Ship {
            start,
            end,
            orientation,
            decks,
            mask,
            sunk: false,
        })
    }

    /// The deck at (`row`, `column`), if this ship owns that cell.
    pub fn deck(&self, row: usize, column: usize) -> Option<&Deck> {
        self.decks
            .iter()
            .find(|deck| deck.row() == row && deck.column() == column)
    }

    /// Strike the deck at (`row`, `column`).
    /// Returns `false` without touching anything when the cell is not part of
    /// this ship. Striking a dead deck again still returns `true`.
    pub fn fire(&mut self, row: usize, column: usize) -> bool {
        let deck = match self
            .decks
            .iter_mut()
            .find(|deck| deck.row() == row && deck.column() == column)
        {
            Some(deck) => deck,
            None => return false,
        };
        deck.strike();
        self.sunk = self.decks.iter().all(|deck| !deck.is_alive());
        true
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.mask.get(row, column).unwrap_or(false)
    }

    /// Check if every deck has been struck.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Decks ordered from `start` to `end`.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> FleetMask {
        self.mask
    }
}
