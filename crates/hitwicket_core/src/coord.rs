//! Grid coordinates.
//!
//! A [`Coord`] is a plain value that may point off the board: destinations are
//! computed first and validated afterwards, never clamped.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 5;

/// A `(row, col)` pair on the 5×5 grid, zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({row},{col})")]
pub struct Coord {
    /// Row index, `0..5` when in bounds.
    pub row: i32,
    /// Column index, `0..5` when in bounds.
    pub col: i32,
}

impl Coord {
    /// Returns true if both components lie in `[0, 4]`.
    #[inline]
    pub fn is_in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Shifts this coordinate by `delta`.
    #[inline]
    pub fn offset(self, delta: Coord) -> Coord {
        self + delta
    }

    /// Reflection across the horizontal midline (`row -> 4 - row`).
    #[inline]
    pub fn mirrored(self) -> Coord {
        Coord::new(BOARD_SIZE - 1 - self.row, self.col)
    }

    /// Row-major cell index, or `None` off the board.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.is_in_bounds()
            .then(|| (self.row as usize, self.col as usize))
    }

    /// Every in-bounds coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}
