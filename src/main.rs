//! HitWicket - command-line front end
//!
//! Reads snapshot and transcript files and prints what the client would show
//! or send. No network transport is involved.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hitwicket::{
    ClientConfig, ClientMessage, ClientSession, GameSnapshot, ServerMessage, SetupForm,
    render_candidates, render_session,
};
use hitwicket_core::{Coord, Direction, MoveRequest, Player, SetupChoice, moves_at, validate_move};
use std::path::Path;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::load().context("Failed to load configuration")?;
    initialize_tracing(&config);

    match cli.command {
        Command::Show { snapshot } => run_show(&snapshot),
        Command::Moves {
            snapshot,
            row,
            col,
            player,
        } => run_moves(&snapshot, Coord::new(row, col), player, &config),
        Command::Request {
            snapshot,
            row,
            col,
            direction,
        } => run_request(&snapshot, Coord::new(row, col), direction),
        Command::Setup { choices } => run_setup(choices),
        Command::Replay { transcript, select } => run_replay(&transcript, select, &config),
    }
}

fn initialize_tracing(config: &ClientConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_snapshot(path: &Path) -> Result<GameSnapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    GameSnapshot::from_json(&json).with_context(|| format!("Invalid snapshot in {}", path.display()))
}

/// Print the board and whose turn it is
#[instrument(skip_all, fields(path = %path.display()))]
fn run_show(path: &Path) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    println!("Current Player: {}", snapshot.current_player());
    println!("{}", snapshot.board());
    Ok(())
}

/// Print the candidates of the piece at `origin`
#[instrument(skip(path, config), fields(path = %path.display()))]
fn run_moves(
    path: &Path,
    origin: Coord,
    player: Option<Player>,
    config: &ClientConfig,
) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    let player = player.unwrap_or(*snapshot.current_player());
    let (piece, candidates) = moves_at(snapshot.board(), origin, player)
        .with_context(|| format!("Cannot list moves at {}", origin))?;
    info!(%piece, count = candidates.len(), "Candidates computed");
    println!("{} at {}", piece, origin);
    println!("{}", render_candidates(&candidates, *config.one_based()));
    Ok(())
}

/// Validate one move and print the outbound message
#[instrument(skip(path), fields(path = %path.display()))]
fn run_request(path: &Path, origin: Coord, direction: Direction) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    let player = *snapshot.current_player();
    let piece = snapshot
        .board()
        .occupant_at(origin)?
        .with_context(|| format!("No piece at {}", origin))?;
    let request = MoveRequest::new(piece, direction);
    let candidate = validate_move(snapshot.board(), request, player)
        .with_context(|| format!("Move {} rejected", request))?;
    debug!(destination = %candidate.destination, "Move validated");
    println!("{}", ClientMessage::from(request).to_json()?);
    Ok(())
}

/// Fill the setup form in slot order and print the outbound message
#[instrument]
fn run_setup(choices: Vec<SetupChoice>) -> Result<()> {
    let mut form = SetupForm::new();
    for (slot, choice) in choices.into_iter().enumerate() {
        form.set(slot, Some(choice))?;
    }
    println!("{}", form.submit()?.to_json()?);
    Ok(())
}

/// Replay server messages through a session and print the final screen
#[instrument(skip(path, config), fields(path = %path.display()))]
fn run_replay(path: &Path, select: Option<(i32, i32)>, config: &ClientConfig) -> Result<()> {
    let transcript = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut session = ClientSession::resumed();
    for (n, line) in transcript.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let message = ServerMessage::from_json(line)
            .with_context(|| format!("Line {}: not a server message", n + 1))?;
        let event = session
            .handle(message)
            .with_context(|| format!("Line {}: message rejected", n + 1))?;
        debug!(line = n + 1, ?event, "Applied message");
    }

    if let Some((row, col)) = select {
        session.click(Coord::new(row, col))?;
    }

    println!("{}", render_session(&session, *config.one_based()));
    Ok(())
}
