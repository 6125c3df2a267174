//! Error types for board queries and move generation.
//!
//! An empty candidate set is a valid result and never an error.

use crate::coord::Coord;
use crate::direction::Direction;
use crate::types::{Piece, Player};

/// Why a move-generation request is inconsistent with the board it names.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Precondition {
    /// The origin lies outside the grid.
    #[display("origin {} is outside the board", _0)]
    OriginOutOfBounds(Coord),

    /// The origin cell holds no piece.
    #[display("origin {} is empty", _0)]
    OriginEmpty(Coord),

    /// The origin holds a different piece than the one named.
    #[display("expected {expected} at origin but found {found}")]
    PieceMismatch {
        /// Piece named by the caller.
        expected: Piece,
        /// Piece actually on the origin cell.
        found: Piece,
    },

    /// The piece is not owned by the acting player.
    #[display("{piece} is not owned by player {player}")]
    NotOwner {
        /// Piece the caller asked to move.
        piece: Piece,
        /// Player the caller claims is acting.
        player: Player,
    },

    /// The piece does not appear anywhere on the board.
    #[display("{} is not on the board", _0)]
    PieceNotOnBoard(Piece),

    /// The direction is not a legal candidate for the piece this ply.
    #[display("{piece} cannot move {direction}")]
    IllegalDirection {
        /// Piece the caller asked to move.
        piece: Piece,
        /// Requested direction.
        direction: Direction,
    },
}

/// Error raised by the board model or the move generator.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// A coordinate outside the 5×5 grid was queried.
    #[display("coordinate {} is outside the 5x5 board", _0)]
    OutOfRange(Coord),

    /// The caller's request contradicts the board.
    #[display("precondition failed: {}", _0)]
    Precondition(Precondition),

    /// A board violates its structural invariants.
    #[display("corrupt snapshot: {}", _0)]
    CorruptSnapshot(String),

    /// A piece or setup identifier could not be parsed.
    #[display("invalid piece identifier {:?}", _0)]
    InvalidIdentifier(String),
}

impl std::error::Error for RulesError {}

impl From<Precondition> for RulesError {
    fn from(reason: Precondition) -> Self {
        RulesError::Precondition(reason)
    }
}
