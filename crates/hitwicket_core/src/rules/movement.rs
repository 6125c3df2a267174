//! Rule table: piece kind to direction subset.

use crate::direction::{DIAGONAL, Direction, ORTHOGONAL};
use crate::types::PieceKind;

/// Directions `kind` may step in, in iteration order.
///
/// This table is the only place the generator learns how a kind moves; a new
/// kind only has to declare its subset here.
pub fn directions_for(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Pawn | PieceKind::Hero1 => &ORTHOGONAL,
        PieceKind::Hero2 => &DIAGONAL,
    }
}

impl PieceKind {
    /// Shorthand for [`directions_for`].
    pub fn directions(self) -> &'static [Direction] {
        directions_for(self)
    }
}
