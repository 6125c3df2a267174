//! Candidate moves and the move request handed to the authority service.

use crate::coord::Coord;
use crate::direction::Direction;
use crate::types::Piece;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One legal next position for the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct CandidateMove {
    /// Direction label the move is submitted under.
    pub direction: Direction,
    /// Cell the piece would land on.
    pub destination: Coord,
}

impl CandidateMove {
    /// Pairs this candidate with the piece that makes it.
    pub fn into_request(self, piece: Piece) -> MoveRequest {
        MoveRequest::new(piece, self.direction)
    }

    /// Label with one-based coordinates, as shown on the move-option buttons.
    pub fn label(&self) -> String {
        format!(
            "{} to ({},{})",
            self.direction,
            self.destination.row + 1,
            self.destination.col + 1
        )
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The `{piece, direction}` pair the authority service applies.
///
/// Serialization beyond this pair belongs to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveRequest {
    /// Piece being moved.
    pub piece: Piece,
    /// Chosen direction.
    pub direction: Direction,
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.piece, self.direction)
    }
}
