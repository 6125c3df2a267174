//! Tests for the client session driven by server messages.

use hitwicket::{
    ClickOutcome, ClientMessage, ClientSession, SETUP_SLOTS, ServerMessage, SessionError,
    SessionEvent, SetupError, SetupForm, render_session,
};
use hitwicket_core::{
    CandidateMove, Coord, Direction, Piece, Player, RulesError, SetupChoice,
};
use serde_json::json;

fn state_message(kind: &str, current_player: &str) -> ServerMessage {
    let message = json!({
        "type": kind,
        "gameState": {
            "board": [
                ["A-P1", null, null, null, null],
                [null, null, "B-H1", null, null],
                [null, null, "A-H2", null, null],
                [null, null, null, "B-P1", null],
                [null, null, null, null, null]
            ],
            "currentPlayer": current_player
        }
    });
    ServerMessage::from_json(&message.to_string()).unwrap()
}

fn playing_session() -> ClientSession {
    let mut session = ClientSession::resumed();
    session.handle(state_message("init", "A")).unwrap();
    session
}

#[test]
fn test_click_before_setup_is_ignored() {
    let mut session = ClientSession::new();
    session.handle(state_message("init", "A")).unwrap();
    assert_eq!(session.click(Coord::new(0, 0)), Ok(ClickOutcome::Ignored));
    assert!(session.selection().is_none());
}

#[test]
fn test_click_without_snapshot_is_ignored() {
    let mut session = ClientSession::resumed();
    assert_eq!(session.click(Coord::new(0, 0)), Ok(ClickOutcome::Ignored));
}

#[test]
fn test_setup_then_select_and_move() {
    let mut session = ClientSession::new();
    let choices = [
        SetupChoice::Pawn(1),
        SetupChoice::Pawn(2),
        SetupChoice::Hero1,
        SetupChoice::Pawn(4),
        SetupChoice::Hero2,
    ];
    for (slot, choice) in choices.into_iter().enumerate() {
        session.setup_mut().set(slot, Some(choice)).unwrap();
    }
    assert!(matches!(session.submit_setup(), Ok(ClientMessage::Setup(_))));
    assert!(session.setup_complete());
    assert_eq!(
        session.submit_setup(),
        Err(SessionError::SetupAlreadySubmitted)
    );

    session.handle(state_message("init", "A")).unwrap();
    let ClickOutcome::Selected(selection) = session.click(Coord::new(0, 0)).unwrap() else {
        panic!("expected selection");
    };
    assert_eq!(selection.piece, Piece::pawn(Player::A, 1).unwrap());
    assert_eq!(
        selection.candidates,
        vec![
            CandidateMove::new(Direction::Right, Coord::new(0, 1)),
            CandidateMove::new(Direction::Forward, Coord::new(1, 0)),
        ]
    );

    let message = session.choose(1).unwrap();
    assert_eq!(
        message.to_json().unwrap(),
        r#"{"type":"move","data":{"character":"A-P1","move":"F"}}"#
    );
    assert!(session.selection().is_none());
}

#[test]
fn test_incomplete_setup_keeps_board_locked() {
    let mut session = ClientSession::new();
    session.setup_mut().set(0, Some(SetupChoice::Pawn(1))).unwrap();
    let err = session.submit_setup().unwrap_err();
    assert_eq!(err.to_string(), "Please place all 5 characters.");
    assert!(!session.setup_complete());
}

#[test]
fn test_hero2_lists_diagonals_with_capture() {
    let mut session = playing_session();
    session.click(Coord::new(2, 2)).unwrap();
    let destinations: Vec<Coord> = session
        .candidates()
        .iter()
        .map(|mv| mv.destination)
        .collect();
    assert_eq!(
        destinations,
        vec![
            Coord::new(3, 1),
            Coord::new(3, 3),
            Coord::new(1, 1),
            Coord::new(1, 3)
        ]
    );
}

#[test]
fn test_opponent_and_empty_clicks_keep_selection() {
    let mut session = playing_session();
    session.click(Coord::new(0, 0)).unwrap();
    let before = session.selection().cloned();

    assert_eq!(session.click(Coord::new(3, 3)), Ok(ClickOutcome::Ignored));
    assert_eq!(session.click(Coord::new(4, 4)), Ok(ClickOutcome::Ignored));
    assert_eq!(session.selection().cloned(), before);
}

#[test]
fn test_click_off_board_is_an_error() {
    let mut session = playing_session();
    assert_eq!(
        session.click(Coord::new(5, 0)),
        Err(SessionError::Rules(RulesError::OutOfRange(Coord::new(5, 0))))
    );
}

#[test]
fn test_update_clears_selection() {
    let mut session = playing_session();
    session.click(Coord::new(0, 0)).unwrap();
    assert!(session.selection().is_some());

    let event = session.handle(state_message("update", "B")).unwrap();
    assert_eq!(
        event,
        SessionEvent::SnapshotReplaced {
            current_player: Player::B
        }
    );
    assert!(session.selection().is_none());
    assert!(session.candidates().is_empty());
}

#[test]
fn test_player_b_selects_own_piece() {
    let mut session = ClientSession::resumed();
    session.handle(state_message("init", "B")).unwrap();

    assert_eq!(session.click(Coord::new(0, 0)), Ok(ClickOutcome::Ignored));
    session.click(Coord::new(3, 3)).unwrap();
    assert_eq!(session.candidates().len(), 4);

    let forward = session
        .candidates()
        .iter()
        .position(|mv| mv.direction == Direction::Forward)
        .unwrap();
    assert_eq!(session.candidates()[forward].destination, Coord::new(2, 3));
    let json = session.choose(forward).unwrap().to_json().unwrap();
    assert_eq!(json, r#"{"type":"move","data":{"character":"B-P1","move":"F"}}"#);
}

#[test]
fn test_choose_errors() {
    let mut session = playing_session();
    assert_eq!(session.choose(0), Err(SessionError::NothingSelected));

    session.click(Coord::new(0, 0)).unwrap();
    assert_eq!(session.choose(9), Err(SessionError::NoSuchCandidate(9)));
    assert!(session.selection().is_some());
}

#[test]
fn test_end_blocks_clicks() {
    let mut session = playing_session();
    session.click(Coord::new(0, 0)).unwrap();

    let event = session
        .handle(ServerMessage::End { winner: Player::B })
        .unwrap();
    assert_eq!(event, SessionEvent::GameOver { winner: Player::B });
    assert_eq!(session.winner(), Some(Player::B));
    assert!(session.selection().is_none());
    assert_eq!(session.click(Coord::new(0, 0)), Ok(ClickOutcome::Ignored));
}

#[test]
fn test_corrupt_update_keeps_previous_snapshot() {
    let mut session = playing_session();
    let bad = json!({
        "type": "update",
        "gameState": {
            "board": [["A-P1", "A-P1", null, null, null]],
            "currentPlayer": "B"
        }
    });
    let result = session.handle(ServerMessage::from_json(&bad.to_string()).unwrap());
    assert!(matches!(result, Err(SessionError::Snapshot(_))));
    assert_eq!(
        *session.snapshot().unwrap().current_player(),
        Player::A
    );
}

#[test]
fn test_history_and_render() {
    let mut session = playing_session();
    let event = session
        .handle(ServerMessage::MoveHistory {
            data: vec!["A-P1 moved F".to_string()],
        })
        .unwrap();
    assert_eq!(event, SessionEvent::HistoryUpdated { entries: 1 });
    assert_eq!(session.history(), ["A-P1 moved F".to_string()]);

    session.click(Coord::new(0, 0)).unwrap();
    let screen = render_session(&session, true);
    assert!(screen.starts_with("Current Player: A"));
    assert!(screen.contains("[A-P1]"));
    assert!(screen.contains("[0] R to (1,2)"));
    assert!(screen.contains("[1] F to (2,1)"));
    assert!(screen.ends_with("1. A-P1 moved F"));
}

#[test]
fn test_render_winner_header() {
    let mut session = playing_session();
    session.handle(ServerMessage::End { winner: Player::A }).unwrap();
    let screen = render_session(&session, false);
    assert!(screen.starts_with("Player A wins!"));
    assert!(screen.contains("No possible moves"));
    assert!(screen.contains("(no moves yet)"));
}

/// Places both sides' setup choices on the back rows and wraps them in an `init`.
fn init_from_setup(choices: &[SetupChoice]) -> ServerMessage {
    let row = |player: &str| -> Vec<serde_json::Value> {
        choices
            .iter()
            .map(|choice| json!(format!("{}-{}", player, choice)))
            .collect()
    };
    let empty = vec![serde_json::Value::Null; 5];
    let message = json!({
        "type": "init",
        "gameState": {
            "board": [row("A"), empty, empty, empty, row("B")],
            "currentPlayer": "A"
        }
    });
    ServerMessage::from_json(&message.to_string()).unwrap()
}

#[test]
fn test_all_pawn_setup_is_rejected() {
    let mut session = ClientSession::new();
    for slot in 0..SETUP_SLOTS {
        session
            .setup_mut()
            .set(slot, Some(SetupChoice::Pawn(slot as u8 + 1)))
            .unwrap();
    }
    assert_eq!(
        session.submit_setup(),
        Err(SessionError::Setup(SetupError::Roster { pawns: 5 }))
    );
    assert!(!session.setup_complete());
}

#[test]
fn test_every_accepted_setup_decodes() {
    let mut accepted = 0;
    for code in 0..3usize.pow(SETUP_SLOTS as u32) {
        let mut form = SetupForm::new();
        let mut rest = code;
        for slot in 0..SETUP_SLOTS {
            let options = SetupForm::options(slot).unwrap();
            form.set(slot, Some(options[rest % 3])).unwrap();
            rest /= 3;
        }

        let Ok(ClientMessage::Setup(payload)) = form.submit() else {
            continue;
        };
        accepted += 1;

        let mut session = ClientSession::resumed();
        let event = session.handle(init_from_setup(&payload.setup_positions));
        assert!(
            event.is_ok(),
            "{:?} was accepted but its snapshot was rejected: {:?}",
            payload.setup_positions,
            event
        );
    }
    // 5 choose 2 hero slots, times 2 hero orders
    assert_eq!(accepted, 20);
}

#[test]
fn test_init_after_end_starts_new_game() {
    let mut session = playing_session();
    session.handle(ServerMessage::End { winner: Player::A }).unwrap();
    assert_eq!(session.click(Coord::new(0, 0)), Ok(ClickOutcome::Ignored));

    session.handle(state_message("init", "A")).unwrap();
    assert_eq!(session.winner(), None);
    assert!(matches!(
        session.click(Coord::new(0, 0)),
        Ok(ClickOutcome::Selected(_))
    ));
}

#[test]
fn test_update_after_end_keeps_winner() {
    let mut session = playing_session();
    session.handle(ServerMessage::End { winner: Player::B }).unwrap();
    session.handle(state_message("update", "A")).unwrap();
    assert_eq!(session.winner(), Some(Player::B));
}
