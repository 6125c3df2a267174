//! The 5×5 board model.
//!
//! A [`Board`] is an immutable snapshot: it answers structural queries and is
//! replaced wholesale whenever the authority service pushes a new state.

use crate::coord::{BOARD_SIZE, Coord};
use crate::error::RulesError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::types::{Piece, Player};
use std::fmt;
use tracing::{instrument, warn};

const SIZE: usize = BOARD_SIZE as usize;

/// Rows of cells, each empty or holding one piece.
pub type Rows = [[Option<Piece>; SIZE]; SIZE];

/// 5×5 board; each cell holds at most one piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Rows,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Builds a board from its rows, rejecting layouts that break the board invariants.
    #[instrument(skip(rows))]
    pub fn from_rows(rows: Rows) -> Result<Self, RulesError> {
        let board = Self { cells: rows };
        board.validate()?;
        Ok(board)
    }

    /// Returns a new board with `piece` placed at `coord`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `coord` is off the board, `CorruptSnapshot` if the cell
    /// is taken or the placement breaks an invariant.
    #[instrument(skip(self))]
    pub fn with_piece(mut self, coord: Coord, piece: Piece) -> Result<Self, RulesError> {
        let (row, col) = coord.index().ok_or(RulesError::OutOfRange(coord))?;
        if let Some(existing) = self.cells[row][col] {
            warn!(%existing, "Cell already occupied");
            return Err(RulesError::CorruptSnapshot(format!(
                "cell {} already holds {}",
                coord, existing
            )));
        }
        self.cells[row][col] = Some(piece);
        self.validate()?;
        Ok(self)
    }

    /// Returns the piece at `coord`, or `None` if the cell is empty.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `coord` is outside `[0,4]×[0,4]`.
    pub fn occupant_at(&self, coord: Coord) -> Result<Option<Piece>, RulesError> {
        let (row, col) = coord.index().ok_or(RulesError::OutOfRange(coord))?;
        Ok(self.cells[row][col])
    }

    /// True iff the cell holds a piece owned by `player`.
    pub fn is_friendly(&self, coord: Coord, player: Player) -> bool {
        self.owner_at(coord) == Some(player)
    }

    /// True iff the cell holds a piece owned by the other player.
    pub fn is_opponent(&self, coord: Coord, player: Player) -> bool {
        self.owner_at(coord) == Some(player.opponent())
    }

    /// Pure range check; never fails.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.is_in_bounds()
    }

    fn owner_at(&self, coord: Coord) -> Option<Player> {
        coord
            .index()
            .and_then(|(row, col)| self.cells[row][col])
            .map(|piece| piece.owner())
    }

    /// Iterates occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| {
            coord
                .index()
                .and_then(|(row, col)| self.cells[row][col])
                .map(|piece| (coord, piece))
        })
    }

    /// Finds the cell holding `piece`.
    pub fn locate(&self, piece: Piece) -> Option<Coord> {
        self.pieces()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(coord, _)| coord)
    }

    /// Number of live pieces owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, p)| p.owner() == player).count()
    }

    /// Returns the rows of cells.
    pub fn rows(&self) -> &Rows {
        &self.cells
    }

    /// Returns the same position reflected across the horizontal midline with
    /// every piece handed to the other player.
    pub fn mirrored(&self) -> Self {
        let mut cells: Rows = [[None; SIZE]; SIZE];
        for (coord, piece) in self.pieces() {
            let target = coord.mirrored();
            cells[target.row as usize][target.col as usize] =
                Some(piece.for_player(piece.owner().opponent()));
        }
        Self { cells }
    }

    fn validate(&self) -> Result<(), RulesError> {
        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariants violated");
            RulesError::CorruptSnapshot(descriptions)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Some(piece) => format!("{:<4}", piece.to_string()),
                    None => format!("{:<4}", "."),
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line.trim_end())?;
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
