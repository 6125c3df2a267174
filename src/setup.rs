//! The five-slot character setup form.

use crate::protocol::{ClientMessage, SetupPayload};
use hitwicket_core::invariants::MAX_PAWNS_PER_PLAYER;
use hitwicket_core::{PieceKind, SetupChoice};
use tracing::{info, instrument, warn};

/// Number of characters each side places.
pub const SETUP_SLOTS: usize = 5;

/// Error raised while filling or submitting the setup form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Slot index past the fifth slot.
    #[display("setup slot {} does not exist", _0)]
    NoSuchSlot(usize),

    /// The choice is not one of the slot's options.
    #[display("{choice} is not offered in slot {slot}")]
    NotOffered {
        /// Zero-based slot index.
        slot: usize,
        /// Rejected choice.
        choice: SetupChoice,
    },

    /// Not every slot has a character.
    #[display("Please place all 5 characters.")]
    Incomplete,

    /// The same character was chosen twice.
    #[display("{} was chosen more than once", _0)]
    Duplicate(SetupChoice),

    /// The five characters are not three pawns, one Hero1 and one Hero2.
    #[display("Place 3 pawns, 1 Hero1 and 1 Hero2 ({} pawns chosen).", pawns)]
    Roster {
        /// Number of pawns chosen.
        pawns: usize,
    },
}

impl std::error::Error for SetupError {}

/// Setup form state: one optional character per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupForm {
    slots: [Option<SetupChoice>; SETUP_SLOTS],
}

impl SetupForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choices offered in `slot`: its own pawn number, Hero1 and Hero2.
    pub fn options(slot: usize) -> Option<[SetupChoice; 3]> {
        (slot < SETUP_SLOTS).then(|| {
            [
                SetupChoice::Pawn(slot as u8 + 1),
                SetupChoice::Hero1,
                SetupChoice::Hero2,
            ]
        })
    }

    /// Sets or clears one slot.
    #[instrument(skip(self))]
    pub fn set(&mut self, slot: usize, choice: Option<SetupChoice>) -> Result<(), SetupError> {
        let options = Self::options(slot).ok_or(SetupError::NoSuchSlot(slot))?;
        if let Some(choice) = choice
            && !options.contains(&choice)
        {
            warn!(slot, %choice, "Choice not offered in slot");
            return Err(SetupError::NotOffered { slot, choice });
        }
        self.slots[slot] = choice;
        Ok(())
    }

    /// Returns the slots in order.
    pub fn slots(&self) -> &[Option<SetupChoice>; SETUP_SLOTS] {
        &self.slots
    }

    /// Validates the form and builds the setup message.
    ///
    /// The roster must be exactly three pawns, one Hero1 and one Hero2, the
    /// same pieces a snapshot may hold per player.
    #[instrument(skip(self))]
    pub fn submit(&self) -> Result<ClientMessage, SetupError> {
        let chosen: Vec<SetupChoice> = self.slots.iter().flatten().copied().collect();
        if chosen.len() != SETUP_SLOTS {
            warn!(filled = chosen.len(), "Setup submitted before all slots were filled");
            return Err(SetupError::Incomplete);
        }
        for (i, choice) in chosen.iter().enumerate() {
            if chosen[..i].contains(choice) {
                warn!(%choice, "Duplicate setup choice");
                return Err(SetupError::Duplicate(*choice));
            }
        }

        let pawns = chosen
            .iter()
            .filter(|choice| choice.kind() == PieceKind::Pawn)
            .count();
        if pawns != MAX_PAWNS_PER_PLAYER {
            warn!(pawns, "Setup roster is not 3 pawns and 2 heroes");
            return Err(SetupError::Roster { pawns });
        }

        info!(?chosen, "Setup submitted");
        Ok(ClientMessage::Setup(SetupPayload {
            setup_positions: chosen,
        }))
    }
}
