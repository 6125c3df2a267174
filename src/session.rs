//! Client-side selection state.
//!
//! The session owns what the presentation layer needs between gestures: the
//! latest snapshot, the setup form, the selected piece and its candidates,
//! and the display history. Rules questions go to `hitwicket_core`.

use crate::protocol::{ClientMessage, ServerMessage, WireGameState};
use crate::setup::{SetupError, SetupForm};
use crate::snapshot::{GameSnapshot, SnapshotError};
use hitwicket_core::{CandidateMove, Coord, Piece, Player, RulesError, moves_at};
use tracing::{debug, info, instrument, warn};

/// Error raised by a session operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// An update carried an undecodable snapshot.
    #[display("{}", _0)]
    Snapshot(SnapshotError),

    /// The setup form was rejected.
    #[display("{}", _0)]
    Setup(SetupError),

    /// The rules engine rejected a query.
    #[display("{}", _0)]
    Rules(RulesError),

    /// Setup was already submitted.
    #[from(ignore)]
    #[display("setup has already been submitted")]
    SetupAlreadySubmitted,

    /// A move was chosen with no piece selected.
    #[from(ignore)]
    #[display("no piece is selected")]
    NothingSelected,

    /// The chosen index is not one of the listed candidates.
    #[from(ignore)]
    #[display("no candidate move #{}", _0)]
    NoSuchCandidate(usize),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Snapshot(e) => Some(e),
            SessionError::Setup(e) => Some(e),
            SessionError::Rules(e) => Some(e),
            _ => None,
        }
    }
}

/// What an inbound message changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new snapshot replaced the old one.
    SnapshotReplaced {
        /// Player to move in the new snapshot.
        current_player: Player,
    },
    /// The authority declared a winner.
    GameOver {
        /// Winning player.
        winner: Player,
    },
    /// The move history was replaced.
    HistoryUpdated {
        /// Number of entries.
        entries: usize,
    },
}

/// The currently selected piece and its candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Cell the piece stands on.
    pub origin: Coord,
    /// The selected piece.
    pub piece: Piece,
    /// Its legal candidates, in direction order.
    pub candidates: Vec<CandidateMove>,
}

/// Result of clicking a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece of the current player was selected.
    Selected(Selection),
}

/// Presentation-side state for one game.
#[derive(Debug, Clone, Default)]
pub struct ClientSession {
    snapshot: Option<GameSnapshot>,
    setup: SetupForm,
    setup_complete: bool,
    selection: Option<Selection>,
    history: Vec<String>,
    winner: Option<Player>,
}

impl ClientSession {
    /// Creates a session awaiting setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for a game whose setup was submitted elsewhere.
    pub fn resumed() -> Self {
        Self {
            setup_complete: true,
            ..Self::default()
        }
    }

    /// Applies an inbound message.
    ///
    /// Snapshots replace the previous one wholesale and drop the selection,
    /// whose candidates were computed against the old board. An `init` starts
    /// a new game and clears any recorded winner.
    #[instrument(skip_all, fields(kind = message.kind()))]
    pub fn handle(&mut self, message: ServerMessage) -> Result<SessionEvent, SessionError> {
        match message {
            ServerMessage::Init { game_state } => {
                let event = self.replace_snapshot(&game_state)?;
                if let Some(winner) = self.winner.take() {
                    info!(%winner, "New game started after previous result");
                }
                Ok(event)
            }
            ServerMessage::Update { game_state } => self.replace_snapshot(&game_state),
            ServerMessage::End { winner } => {
                info!(%winner, "Game over");
                self.winner = Some(winner);
                self.selection = None;
                Ok(SessionEvent::GameOver { winner })
            }
            ServerMessage::MoveHistory { data } => {
                let entries = data.len();
                self.history = data;
                Ok(SessionEvent::HistoryUpdated { entries })
            }
        }
    }

    fn replace_snapshot(&mut self, state: &WireGameState) -> Result<SessionEvent, SessionError> {
        let snapshot = GameSnapshot::try_from(state)?;
        let current_player = *snapshot.current_player();
        self.snapshot = Some(snapshot);
        self.selection = None;
        debug!(%current_player, "Snapshot replaced");
        Ok(SessionEvent::SnapshotReplaced { current_player })
    }

    /// Mutable access to the setup form.
    pub fn setup_mut(&mut self) -> &mut SetupForm {
        &mut self.setup
    }

    /// Submits the setup form; on success the board becomes clickable.
    #[instrument(skip(self))]
    pub fn submit_setup(&mut self) -> Result<ClientMessage, SessionError> {
        if self.setup_complete {
            return Err(SessionError::SetupAlreadySubmitted);
        }
        let message = self.setup.submit()?;
        self.setup_complete = true;
        Ok(message)
    }

    /// Handles a click on `coord`.
    ///
    /// Selecting a piece of the current player computes its candidates.
    /// Clicks before setup, without a snapshot, after the game ended, or on
    /// cells that are empty or hold an opponent's piece are ignored and keep
    /// the current selection.
    ///
    /// # Errors
    ///
    /// `Rules(OutOfRange)` for a coordinate off the board.
    #[instrument(skip(self))]
    pub fn click(&mut self, coord: Coord) -> Result<ClickOutcome, SessionError> {
        if !self.setup_complete || self.winner.is_some() {
            return Ok(ClickOutcome::Ignored);
        }
        let Some(snapshot) = &self.snapshot else {
            return Ok(ClickOutcome::Ignored);
        };

        let current_player = *snapshot.current_player();
        match snapshot.board().occupant_at(coord)? {
            Some(piece) if piece.owner() == current_player => {
                let (piece, candidates) = moves_at(snapshot.board(), coord, current_player)?;
                debug!(%piece, count = candidates.len(), "Piece selected");
                let selection = Selection {
                    origin: coord,
                    piece,
                    candidates,
                };
                self.selection = Some(selection.clone());
                Ok(ClickOutcome::Selected(selection))
            }
            _ => Ok(ClickOutcome::Ignored),
        }
    }

    /// Chooses candidate `index` of the current selection and builds the move request.
    ///
    /// The selection is cleared; the next snapshot decides what happened.
    #[instrument(skip(self))]
    pub fn choose(&mut self, index: usize) -> Result<ClientMessage, SessionError> {
        let selection = self.selection.as_ref().ok_or(SessionError::NothingSelected)?;
        let Some(candidate) = selection.candidates.get(index).copied() else {
            warn!(index, available = selection.candidates.len(), "Unknown candidate");
            return Err(SessionError::NoSuchCandidate(index));
        };
        let request = candidate.into_request(selection.piece);
        info!(%request, "Move chosen");
        self.selection = None;
        Ok(request.into())
    }

    /// Drops the current selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Latest snapshot, if any arrived.
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// Whether setup has been submitted.
    pub fn setup_complete(&self) -> bool {
        self.setup_complete
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Candidates of the current selection; empty when nothing is selected.
    pub fn candidates(&self) -> &[CandidateMove] {
        self.selection
            .as_ref()
            .map(|s| s.candidates.as_slice())
            .unwrap_or(&[])
    }

    /// Move history as last sent by the authority.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Winner, once the game has ended.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
}
