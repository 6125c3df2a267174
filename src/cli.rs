//! Command-line interface for hitwicket.

use clap::{Parser, Subcommand};
use hitwicket_core::{Direction, Player, SetupChoice};
use std::path::PathBuf;

/// HitWicket - client-side rules engine for the 5x5 chess variant
#[derive(Parser, Debug)]
#[command(name = "hitwicket")]
#[command(about = "Inspect snapshots and build move requests offline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the board of a snapshot file
    Show {
        /// JSON file holding a game state or an init/update message
        snapshot: PathBuf,
    },

    /// List the candidate moves of the piece at a cell
    Moves {
        /// JSON snapshot file
        snapshot: PathBuf,

        /// Zero-based row
        row: i32,

        /// Zero-based column
        col: i32,

        /// Acting player (defaults to the snapshot's current player)
        #[arg(long)]
        player: Option<Player>,
    },

    /// Validate a move and print the request message
    Request {
        /// JSON snapshot file
        snapshot: PathBuf,

        /// Zero-based row of the moving piece
        row: i32,

        /// Zero-based column of the moving piece
        col: i32,

        /// Direction label (L, R, F, B, FL, FR, BL, BR)
        direction: Direction,
    },

    /// Build the setup message from five choices in slot order
    Setup {
        /// Choices such as P1 H1 P3 H2 P5
        #[arg(num_args = 5, required = true)]
        choices: Vec<SetupChoice>,
    },

    /// Feed a transcript of server messages through a session and print the result
    Replay {
        /// File with one JSON server message per line
        transcript: PathBuf,

        /// Cell to click after the transcript, as ROW,COL (zero-based)
        #[arg(long, value_parser = parse_cell)]
        select: Option<(i32, i32)>,
    },
}

/// Parses `ROW,COL`.
fn parse_cell(s: &str) -> Result<(i32, i32), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {}", e))?;
    Ok((row, col))
}
