//! JSON messages exchanged with the game authority service.
//!
//! Inbound messages are tagged by `"type"`; outbound messages carry their
//! payload under `"data"`.

use hitwicket_core::{Direction, MoveRequest, Piece, Player, SetupChoice};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wire form of the authority's game state.
///
/// Cells are `null` (or an empty string) for empty squares, otherwise a piece
/// identifier such as `A-P1`. Fields this client does not use are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGameState {
    /// Rows of cells.
    pub board: Vec<Vec<Option<String>>>,
    /// Player whose turn it is.
    pub current_player: Player,
}

/// Message pushed by the authority service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// First snapshot after connecting.
    Init {
        /// Full game state.
        #[serde(rename = "gameState")]
        game_state: WireGameState,
    },
    /// Snapshot after a move was applied.
    Update {
        /// Full game state.
        #[serde(rename = "gameState")]
        game_state: WireGameState,
    },
    /// The game is over.
    End {
        /// Winning player.
        winner: Player,
    },
    /// Human-readable move descriptions, oldest first.
    MoveHistory {
        /// History entries.
        data: Vec<String>,
    },
}

impl ServerMessage {
    /// Parses one inbound message.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let message: Self = serde_json::from_str(json)?;
        debug!(kind = message.kind(), "Decoded server message");
        Ok(message)
    }

    /// Wire name of the message type.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::Init { .. } => "init",
            ServerMessage::Update { .. } => "update",
            ServerMessage::End { .. } => "end",
            ServerMessage::MoveHistory { .. } => "moveHistory",
        }
    }
}

/// Setup submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPayload {
    /// The five chosen characters in slot order.
    pub setup_positions: Vec<SetupChoice>,
}

/// Move submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePayload {
    /// Identifier of the moving piece.
    pub character: Piece,
    /// Direction label.
    #[serde(rename = "move")]
    pub direction: Direction,
}

impl From<MoveRequest> for MovePayload {
    fn from(request: MoveRequest) -> Self {
        Self {
            character: request.piece,
            direction: request.direction,
        }
    }
}

/// Message sent to the authority service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Initial placement of the five characters.
    Setup(SetupPayload),
    /// A move request for one piece.
    Move(MovePayload),
}

impl ClientMessage {
    /// Serializes the message for the transport channel.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<MoveRequest> for ClientMessage {
    fn from(request: MoveRequest) -> Self {
        ClientMessage::Move(request.into())
    }
}
