//! Decoding authoritative snapshots into the board model.

use crate::protocol::{ServerMessage, WireGameState};
use derive_getters::Getters;
use hitwicket_core::{BOARD_SIZE, Board, Coord, Piece, Player, Rows, RulesError};
use tracing::{debug, instrument, warn};

/// Board plus the active player, as of the last authoritative update.
///
/// Snapshots are replaced wholesale; nothing here is patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Player whose turn the authority says it is.
    current_player: Player,
}

/// Error decoding a wire snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The board does not have five rows.
    #[display("expected {} rows, got {}", BOARD_SIZE, _0)]
    RowCount(usize),

    /// A row does not have five cells.
    #[display("row {row} has {len} cells, expected {}", BOARD_SIZE)]
    ColumnCount {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// A cell holds an unparseable identifier.
    #[display("cell {coord}: {source}")]
    Cell {
        /// Offending cell.
        coord: Coord,
        /// Parse failure.
        source: RulesError,
    },

    /// The decoded board breaks a board invariant.
    #[display("{}", _0)]
    Board(RulesError),

    /// The JSON is neither a game state nor an init/update message.
    #[display("not a snapshot: {}", _0)]
    NotASnapshot(String),
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Cell { source, .. } | SnapshotError::Board(source) => Some(source),
            _ => None,
        }
    }
}

impl GameSnapshot {
    /// Creates a snapshot from an already validated board.
    pub fn new(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Parses either a bare `gameState` object or an `init`/`update` message.
    ///
    /// JSON with a `"type"` key is decoded as a message and its errors are
    /// reported as such; anything else is decoded as a bare state.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| SnapshotError::NotASnapshot(e.to_string()))?;

        if value.get("type").is_some() {
            let message: ServerMessage = serde_json::from_value(value)
                .map_err(|e| SnapshotError::NotASnapshot(format!("bad message: {}", e)))?;
            return match message {
                ServerMessage::Init { game_state } | ServerMessage::Update { game_state } => {
                    Self::try_from(&game_state)
                }
                other => Err(SnapshotError::NotASnapshot(format!(
                    "{} message carries no game state",
                    other.kind()
                ))),
            };
        }

        let state: WireGameState = serde_json::from_value(value)
            .map_err(|e| SnapshotError::NotASnapshot(e.to_string()))?;
        Self::try_from(&state)
    }
}

impl TryFrom<&WireGameState> for GameSnapshot {
    type Error = SnapshotError;

    #[instrument(skip_all, fields(current_player = %state.current_player))]
    fn try_from(state: &WireGameState) -> Result<Self, Self::Error> {
        let size = BOARD_SIZE as usize;
        if state.board.len() != size {
            warn!(rows = state.board.len(), "Snapshot has wrong row count");
            return Err(SnapshotError::RowCount(state.board.len()));
        }

        let mut rows: Rows = Default::default();
        for (r, row) in state.board.iter().enumerate() {
            if row.len() != size {
                warn!(row = r, len = row.len(), "Snapshot row has wrong length");
                return Err(SnapshotError::ColumnCount { row: r, len: row.len() });
            }
            for (c, cell) in row.iter().enumerate() {
                rows[r][c] = match cell.as_deref() {
                    None | Some("") => None,
                    Some(id) => Some(id.parse::<Piece>().map_err(|source| SnapshotError::Cell {
                        coord: Coord::new(r as i32, c as i32),
                        source,
                    })?),
                };
            }
        }

        let board = Board::from_rows(rows).map_err(SnapshotError::Board)?;
        debug!(
            a = board.count(Player::A),
            b = board.count(Player::B),
            "Decoded snapshot"
        );
        Ok(Self::new(board, state.current_player))
    }
}
