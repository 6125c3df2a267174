//! Player-relative move directions.
//!
//! Directions are symbolic labels resolved to grid offsets through a single
//! lookup keyed by `(direction, player)`. Forward always points toward the
//! opponent's starting edge; lateral steps are the same for both players.

use crate::coord::Coord;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One of the eight single-step move labels.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Direction {
    /// `L`
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    Left,
    /// `R`
    #[serde(rename = "R")]
    #[strum(serialize = "R")]
    Right,
    /// `F`
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    Forward,
    /// `B`
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    Back,
    /// `FL`
    #[serde(rename = "FL")]
    #[strum(serialize = "FL")]
    ForwardLeft,
    /// `FR`
    #[serde(rename = "FR")]
    #[strum(serialize = "FR")]
    ForwardRight,
    /// `BL`
    #[serde(rename = "BL")]
    #[strum(serialize = "BL")]
    BackLeft,
    /// `BR`
    #[serde(rename = "BR")]
    #[strum(serialize = "BR")]
    BackRight,
}

/// Orthogonal steps in their iteration order.
pub const ORTHOGONAL: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Forward,
    Direction::Back,
];

/// Diagonal steps in their iteration order.
pub const DIAGONAL: [Direction; 4] = [
    Direction::ForwardLeft,
    Direction::ForwardRight,
    Direction::BackLeft,
    Direction::BackRight,
];

impl Direction {
    /// Returns the `(Δrow, Δcol)` offset of this direction for `player`.
    pub fn offset(self, player: Player) -> Coord {
        let (dr, dc) = match (self, player) {
            (Direction::Left, _) => (0, -1),
            (Direction::Right, _) => (0, 1),
            (Direction::Forward, Player::A) => (1, 0),
            (Direction::Forward, Player::B) => (-1, 0),
            (Direction::Back, Player::A) => (-1, 0),
            (Direction::Back, Player::B) => (1, 0),
            (Direction::ForwardLeft, Player::A) => (1, -1),
            (Direction::ForwardLeft, Player::B) => (-1, 1),
            (Direction::ForwardRight, Player::A) => (1, 1),
            (Direction::ForwardRight, Player::B) => (-1, -1),
            (Direction::BackLeft, Player::A) => (-1, -1),
            (Direction::BackLeft, Player::B) => (1, 1),
            (Direction::BackRight, Player::A) => (-1, 1),
            (Direction::BackRight, Player::B) => (1, -1),
        };
        Coord::new(dr, dc)
    }

    /// Returns true for the four diagonal labels.
    pub fn is_diagonal(self) -> bool {
        DIAGONAL.contains(&self)
    }
}
