//! HitWicket client library
//!
//! Presentation-side plumbing around the `hitwicket_core` rules engine.
//!
//! # Architecture
//!
//! - **Protocol**: JSON messages exchanged with the game authority service
//! - **Snapshot**: decoding authoritative game states into a validated board
//! - **Setup**: the five-slot character placement form
//! - **Session**: selection state between clicks, driven by server messages
//! - **Render**: plain-text screens for terminals and logs
//!
//! # Example
//!
//! ```no_run
//! use hitwicket::{ClientSession, ServerMessage};
//! use hitwicket_core::Coord;
//!
//! # fn example(line: &str) -> anyhow::Result<()> {
//! let mut session = ClientSession::resumed();
//! session.handle(ServerMessage::from_json(line)?)?;
//! session.click(Coord::new(0, 0))?;
//! let request = session.choose(0)?;
//! println!("{}", request.to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod protocol;
mod render;
mod session;
mod setup;
mod snapshot;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ClientConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Wire protocol
pub use protocol::{ClientMessage, MovePayload, ServerMessage, SetupPayload, WireGameState};

// Crate-level exports - Rendering
pub use render::{candidate_label, render_candidates, render_history, render_session};

// Crate-level exports - Session
pub use session::{ClickOutcome, ClientSession, Selection, SessionError, SessionEvent};

// Crate-level exports - Setup form
pub use setup::{SETUP_SLOTS, SetupError, SetupForm};

// Crate-level exports - Snapshots
pub use snapshot::{GameSnapshot, SnapshotError};
