//! The fleet container: validated ship layout, cell index and fire routing.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coordinate, FireOutcome, GameStatus, ValidationError};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{FleetMask, Ship};

/// What a cell shows when the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// No ship here.
    Water,
    /// A deck that has not been struck.
    Afloat,
    /// A struck deck of a ship that still floats.
    Hit,
    /// A deck of a sunk ship.
    Sunk,
}

impl Cell {
    pub fn glyph(&self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Afloat => '□',
            Cell::Hit => '*',
            Cell::Sunk => 'x',
        }
    }
}

/// A player's board: the fleet and an index from cells to the ship on them.
#[derive(Debug, Clone)]
pub struct Board {
    ships: Vec<Ship>,
    occupancy: [[Option<usize>; BOARD_SIZE]; BOARD_SIZE],
    fleet: FleetMask,
}

impl Board {
    /// Build a board from one `(start, end)` pair per ship.
    ///
    /// The layout must hold exactly [`NUM_SHIPS`] ships matching [`FLEET`],
    /// with no two ships sharing or touching a cell, diagonals included.
    pub fn new(layout: &[(Coordinate, Coordinate)]) -> Result<Self, ValidationError> {
        let board = Self::build(layout);
        if let Err(err) = &board {
            log::warn!("rejected fleet layout: {}", err);
        }
        board
    }

    fn build(layout: &[(Coordinate, Coordinate)]) -> Result<Self, ValidationError> {
        if layout.len() != NUM_SHIPS {
            return Err(ValidationError::ShipCount {
                found: layout.len(),
            });
        }
        let ships = layout
            .iter()
            .map(|&(start, end)| Ship::new(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        check_classes(&ships)?;
        check_spacing(&ships)?;

        let mut occupancy = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut fleet = FleetMask::new();
        for (idx, ship) in ships.iter().enumerate() {
            for deck in ship.decks() {
                occupancy[deck.row()][deck.column()] = Some(idx);
            }
            fleet |= ship.mask();
        }
        log::debug!(
            "accepted fleet of {} ships covering {} cells",
            ships.len(),
            fleet.count_ones()
        );
        Ok(Board {
            ships,
            occupancy,
            fleet,
        })
    }

    /// Fire at `(row, column)` and report what happened.
    ///
    /// Cells without a ship, including ones off the board, miss and leave the
    /// board untouched. Firing again at a struck deck repeats `Hit` or `Sunk`.
    pub fn fire(&mut self, (row, column): Coordinate) -> FireOutcome {
        let idx = match self.occupant(row, column) {
            Some(idx) => idx,
            None => {
                log::trace!("shot at ({}, {}) missed", row, column);
                return FireOutcome::Miss;
            }
        };
        let ship = &mut self.ships[idx];
        let was_sunk = ship.is_sunk();
        if !ship.fire(row, column) {
            log::error!(
                "cell ({}, {}) is indexed to ship {} which does not cover it",
                row,
                column,
                idx
            );
            return FireOutcome::Miss;
        }
        let sunk = ship.is_sunk();
        let outcome = if sunk {
            FireOutcome::Sunk
        } else {
            FireOutcome::Hit
        };
        log::trace!("shot at ({}, {}) -> {}", row, column, outcome);

        if sunk && !was_sunk {
            log::info!("ship {} sunk", idx);
            if self.all_sunk() {
                log::info!("all {} ships sunk", self.ships.len());
            }
        }
        outcome
    }

    fn occupant(&self, row: usize, column: usize) -> Option<usize> {
        self.occupancy.get(row)?.get(column).copied().flatten()
    }

    /// Ships in layout order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering `(row, column)`, if any.
    pub fn ship_at(&self, row: usize, column: usize) -> Option<&Ship> {
        self.occupant(row, column).map(|idx| &self.ships[idx])
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_sunk()).count()
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn status(&self) -> GameStatus {
        if self.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::Active
        }
    }

    /// Union of every ship's cells.
    pub fn fleet_mask(&self) -> FleetMask {
        self.fleet
    }

    /// What `(row, column)` shows, or `None` off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return None;
        }
        let cell = match self.ship_at(row, column) {
            None => Cell::Water,
            Some(ship) => match ship.deck(row, column) {
                Some(deck) if deck.is_alive() => Cell::Afloat,
                _ if ship.is_sunk() => Cell::Sunk,
                _ => Cell::Hit,
            },
        };
        Some(cell)
    }

    /// Draw the board as text, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let glyph = self.cell(row, column).map_or(' ', |cell| cell.glyph());
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Every class in [`FLEET`] must appear exactly as often as it requires.
fn check_classes(ships: &[Ship]) -> Result<(), ValidationError> {
    for class in FLEET.iter() {
        let found = ships
            .iter()
            .filter(|ship| ship.len() == class.length())
            .count();
        if found != class.count() {
            return Err(ValidationError::ClassCount {
                length: class.length(),
                expected: class.count(),
                found,
            });
        }
    }
    Ok(())
}

fn check_spacing(ships: &[Ship]) -> Result<(), ValidationError> {
    for (first, ship) in ships.iter().enumerate() {
        let halo = ship.mask().neighborhood();
        for (second, other) in ships.iter().enumerate().skip(first + 1) {
            if let Some(cell) = (ship.mask() & other.mask()).iter_set_bits().next() {
                return Err(ValidationError::Overlap {
                    first,
                    second,
                    cell,
                });
            }
            if !(halo & other.mask()).is_empty() {
                return Err(ValidationError::Adjacent { first, second });
            }
        }
    }
    Ok(())
}
