//! Movement rules for HitWicket Chess.
//!
//! The rule table (which directions each kind may step in) is kept apart from
//! the generator that applies it to a board.

pub mod movegen;
pub mod movement;

pub use movegen::{generate_moves, moves_at, validate_move};
pub use movement::directions_for;
