//! Common types for the board model: coordinates, shot outcomes and
//! validation errors.

use core::fmt;

use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::config::{ship_class, BOARD_SIZE, NUM_SHIPS};

/// A `(row, column)` cell position.
pub type Coordinate = (usize, usize);

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// A deck was struck and its ship still floats.
    Hit,
    /// A deck was struck and its ship has no live decks left.
    Sunk,
    /// No ship occupies the cell.
    Miss,
}

impl FireOutcome {
    /// The literal outcome string reported to players.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FireOutcome::Hit => "Hit!",
            FireOutcome::Sunk => "Sunk!",
            FireOutcome::Miss => "Miss!",
        }
    }

    /// Returns `true` for `Hit` and `Sunk`.
    pub const fn is_hit(&self) -> bool {
        !matches!(self, FireOutcome::Miss)
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Progress of a game, derived from the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// At least one ship is still afloat.
    Active,
    /// Every ship has been sunk.
    Won,
}

/// Why a fleet layout was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The layout does not hold exactly `NUM_SHIPS` ships.
    #[error("there should be exactly {expected} ships, found {found}", expected = NUM_SHIPS)]
    ShipCount { found: usize },

    /// A ship class appears the wrong number of times.
    #[error(
        "there should be {expected} {} ship{}, found {found}",
        class_name(.length),
        plural(.expected)
    )]
    ClassCount {
        length: usize,
        expected: usize,
        found: usize,
    },

    /// An endpoint is off the board.
    #[error("cell ({row}, {col}) lies outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: usize, col: usize },

    /// Endpoints describe a diagonal.
    #[error("ship endpoints {start:?} and {end:?} share neither a row nor a column")]
    Misaligned { start: Coordinate, end: Coordinate },

    /// Two ships claim the same cell.
    #[error("ships {first} and {second} overlap at {cell:?}")]
    Overlap {
        first: usize,
        second: usize,
        cell: Coordinate,
    },

    /// Two distinct ships touch, diagonals included.
    #[error("ships should not be located in neighboring cells (ship {first} touches ship {second})")]
    Adjacent { first: usize, second: usize },

    /// The occupancy mask cannot hold the board.
    #[error("occupancy mask: {0}")]
    Mask(BitBoardError),
}

fn class_name(length: &usize) -> &'static str {
    ship_class(*length).map_or("unlisted", |class| class.name())
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

impl From<BitBoardError> for ValidationError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                ValidationError::OutOfBounds { row, col }
            }
            other => ValidationError::Mask(other),
        }
    }
}
