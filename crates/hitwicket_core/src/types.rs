//! Core domain types for HitWicket Chess.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
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
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Player {
    /// Player A, advancing toward higher rows.
    A,
    /// Player B, advancing toward lower rows.
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Kind of character, which selects its movement rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PieceKind {
    /// Single orthogonal steps.
    Pawn,
    /// Single orthogonal steps.
    Hero1,
    /// Single diagonal steps.
    Hero2,
}

/// A character on the board: owner, kind, and (for pawns) an index.
///
/// Pieces are value identities. Moving a piece does not mutate it; the next
/// snapshot simply holds the same identity in a different cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Piece {
    owner: Player,
    kind: PieceKind,
    index: Option<u8>,
}

/// Highest pawn number; the setup form offers `P1` through `P5`.
pub const MAX_PAWN_INDEX: u8 = 5;

/// Checks a pawn number against `1..=MAX_PAWN_INDEX`.
fn check_pawn_index(index: u8) -> Result<u8, RulesError> {
    if (1..=MAX_PAWN_INDEX).contains(&index) {
        Ok(index)
    } else {
        Err(RulesError::InvalidIdentifier(format!("P{}", index)))
    }
}

impl Piece {
    /// Creates pawn number `index` for `owner`.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` unless `index` is in `1..=MAX_PAWN_INDEX`.
    pub fn pawn(owner: Player, index: u8) -> Result<Self, RulesError> {
        Ok(Self {
            owner,
            kind: PieceKind::Pawn,
            index: Some(check_pawn_index(index)?),
        })
    }

    /// Creates the Hero1 of `owner`.
    pub fn hero1(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Hero1,
            index: None,
        }
    }

    /// Creates the Hero2 of `owner`.
    pub fn hero2(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Hero2,
            index: None,
        }
    }

    /// Creates the piece a setup choice places for `owner`.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` for a pawn choice outside `1..=MAX_PAWN_INDEX`.
    pub fn from_choice(owner: Player, choice: SetupChoice) -> Result<Self, RulesError> {
        match choice {
            SetupChoice::Pawn(index) => Self::pawn(owner, index),
            SetupChoice::Hero1 => Ok(Self::hero1(owner)),
            SetupChoice::Hero2 => Ok(Self::hero2(owner)),
        }
    }

    /// The same piece handed to `owner`.
    pub(crate) fn for_player(self, owner: Player) -> Self {
        Self { owner, ..self }
    }

    /// Returns the owning player.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Returns the piece kind.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the pawn index, `None` for heroes.
    pub fn index(&self) -> Option<u8> {
        self.index
    }

    /// Returns the side-less part of the identifier (`P1`, `H2`).
    pub fn choice(&self) -> SetupChoice {
        match (self.kind, self.index) {
            (PieceKind::Pawn, Some(index)) => SetupChoice::Pawn(index),
            (PieceKind::Pawn, None) => unreachable!("pawns are always constructed with an index"),
            (PieceKind::Hero1, _) => SetupChoice::Hero1,
            (PieceKind::Hero2, _) => SetupChoice::Hero2,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.owner, self.choice())
    }
}

impl FromStr for Piece {
    type Err = RulesError;

    /// Parses the wire identifier `<player>-<kind><index?>`, e.g. `A-P1`, `B-H2`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, rest) = s
            .split_once('-')
            .ok_or_else(|| RulesError::InvalidIdentifier(s.to_string()))?;
        let owner =
            Player::from_str(owner).map_err(|_| RulesError::InvalidIdentifier(s.to_string()))?;
        let choice =
            SetupChoice::from_str(rest).map_err(|_| RulesError::InvalidIdentifier(s.to_string()))?;
        Piece::from_choice(owner, choice).map_err(|_| RulesError::InvalidIdentifier(s.to_string()))
    }
}

impl TryFrom<String> for Piece {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Piece> for String {
    fn from(piece: Piece) -> Self {
        piece.to_string()
    }
}

/// A character as chosen on the setup form, before a side is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SetupChoice {
    /// Pawn with its 1-based index (`P3`).
    Pawn(u8),
    /// `H1`.
    Hero1,
    /// `H2`.
    Hero2,
}

impl SetupChoice {
    /// Pawn choice `P<index>`.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` unless `index` is in `1..=MAX_PAWN_INDEX`.
    pub fn pawn(index: u8) -> Result<Self, RulesError> {
        check_pawn_index(index).map(SetupChoice::Pawn)
    }

    /// Returns the piece kind this choice places.
    pub fn kind(self) -> PieceKind {
        match self {
            SetupChoice::Pawn(_) => PieceKind::Pawn,
            SetupChoice::Hero1 => PieceKind::Hero1,
            SetupChoice::Hero2 => PieceKind::Hero2,
        }
    }
}

impl fmt::Display for SetupChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupChoice::Pawn(index) => write!(f, "P{}", index),
            SetupChoice::Hero1 => write!(f, "H1"),
            SetupChoice::Hero2 => write!(f, "H2"),
        }
    }
}

impl FromStr for SetupChoice {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RulesError::InvalidIdentifier(s.to_string());
        match s {
            "H1" => Ok(SetupChoice::Hero1),
            "H2" => Ok(SetupChoice::Hero2),
            _ => {
                let digits = s.strip_prefix('P').ok_or_else(invalid)?;
                if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let index = digits.parse::<u8>().map_err(|_| invalid())?;
                SetupChoice::pawn(index).map_err(|_| invalid())
            }
        }
    }
}

impl TryFrom<String> for SetupChoice {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SetupChoice> for String {
    fn from(choice: SetupChoice) -> Self {
        choice.to_string()
    }
}
