//! Structural invariants of a board snapshot.
//!
//! Invariants are logical properties every board handed to the generator must
//! satisfy. They are checked whenever a board is built and can be tested
//! independently.

use crate::board::Board;
use crate::types::{PieceKind, Player};
use std::collections::HashSet;

/// Most live pieces one player can have.
pub const MAX_PIECES_PER_PLAYER: usize = 5;

/// Most pawns one player can have.
pub const MAX_PAWNS_PER_PLAYER: usize = 3;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: each piece identity occupies at most one cell.
pub struct UniqueIdentities;

impl Invariant<Board> for UniqueIdentities {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board.pieces().all(|(_, piece)| seen.insert(piece))
    }

    fn description() -> &'static str {
        "Each piece occupies at most one cell"
    }
}

/// Invariant: no player exceeds the starting roster.
///
/// Five pieces at most, of which three pawns, one Hero1 and one Hero2.
pub struct RosterLimit;

impl Invariant<Board> for RosterLimit {
    fn holds(board: &Board) -> bool {
        [Player::A, Player::B].into_iter().all(|player| {
            let kinds: Vec<PieceKind> = board
                .pieces()
                .filter(|(_, p)| p.owner() == player)
                .map(|(_, p)| p.kind())
                .collect();
            let of = |kind: PieceKind| kinds.iter().filter(|k| **k == kind).count();

            kinds.len() <= MAX_PIECES_PER_PLAYER
                && of(PieceKind::Pawn) <= MAX_PAWNS_PER_PLAYER
                && of(PieceKind::Hero1) <= 1
                && of(PieceKind::Hero2) <= 1
        })
    }

    fn description() -> &'static str {
        "Each player has at most 3 pawns, 1 Hero1 and 1 Hero2"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (UniqueIdentities, RosterLimit);
