//! Plain-text rendering of the session for terminals and logs.

use crate::session::ClientSession;
use hitwicket_core::{BOARD_SIZE, CandidateMove, Coord};
use std::fmt::Write;

/// Label of a candidate, with one- or zero-based coordinates.
pub fn candidate_label(mv: &CandidateMove, one_based: bool) -> String {
    if one_based {
        mv.label()
    } else {
        format!("{} to {}", mv.direction, mv.destination)
    }
}

/// The move-options block.
pub fn render_candidates(candidates: &[CandidateMove], one_based: bool) -> String {
    if candidates.is_empty() {
        return "No possible moves".to_string();
    }
    candidates
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("[{}] {}", i, candidate_label(mv, one_based)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The move-history block, one entry per line.
pub fn render_history(history: &[String]) -> String {
    if history.is_empty() {
        return "(no moves yet)".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full screen: header, board with the selected cell bracketed, options and history.
pub fn render_session(session: &ClientSession, one_based: bool) -> String {
    let mut out = String::new();

    let Some(snapshot) = session.snapshot() else {
        return "Waiting for game state...".to_string();
    };

    match session.winner() {
        Some(winner) => {
            let _ = writeln!(out, "Player {} wins!", winner);
        }
        None => {
            let _ = writeln!(out, "Current Player: {}", snapshot.current_player());
        }
    }

    let base = if one_based { 1 } else { 0 };
    let selected = session.selection().map(|s| s.origin);
    let header = (0..BOARD_SIZE)
        .map(|c| format!("{:^6}", c + base))
        .collect::<String>();
    let _ = writeln!(out, "   {}", header.trim_end());
    for (r, row) in snapshot.board().rows().iter().enumerate() {
        let coord_row = r as i32;
        let cells = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let text = cell.map(|p| p.to_string()).unwrap_or_else(|| ".".to_string());
                if selected == Some(Coord::new(coord_row, c as i32)) {
                    format!("[{:^4}]", text)
                } else {
                    format!(" {:^4} ", text)
                }
            })
            .collect::<String>();
        let _ = writeln!(out, "{:>2} {}", coord_row + base, cells.trim_end());
    }

    let _ = writeln!(out, "\nMove Options");
    let _ = writeln!(out, "{}", render_candidates(session.candidates(), one_based));
    let _ = writeln!(out, "\nMove History");
    let _ = write!(out, "{}", render_history(session.history()));
    out
}
