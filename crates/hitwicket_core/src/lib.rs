//! Pure HitWicket Chess rules.
//!
//! Two layers:
//!
//! - **Board model**: an immutable 5×5 snapshot answering cell and ownership
//!   queries ([`Board`]).
//! - **Move generator**: the legal candidates of one piece for one ply
//!   ([`generate_moves`]), driven by a kind → direction table and a
//!   player-relative direction lookup.
//!
//! Turn order, combat resolution and win detection belong to the authority
//! service and are not handled here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod coord;
mod direction;
mod error;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{CandidateMove, MoveRequest};
pub use board::{Board, Rows};
pub use coord::{BOARD_SIZE, Coord};
pub use direction::{DIAGONAL, Direction, ORTHOGONAL};
pub use error::{Precondition, RulesError};
pub use rules::{directions_for, generate_moves, moves_at, validate_move};
pub use types::{MAX_PAWN_INDEX, Piece, PieceKind, Player, SetupChoice};
