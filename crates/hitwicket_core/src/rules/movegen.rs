//! Single-piece move generation.
//!
//! The generator is a pure function of its arguments: it reads the board,
//! never mutates it, and keeps no state between calls.

use crate::action::{CandidateMove, MoveRequest};
use crate::board::Board;
use crate::coord::Coord;
use crate::error::{Precondition, RulesError};
use crate::types::{Piece, Player};
use tracing::{debug, instrument, warn};

/// Computes every legal candidate for `piece` standing on `origin`.
///
/// Candidates follow the kind's declared direction order. A destination is
/// kept when it is on the board and not held by one of `acting_player`'s own
/// pieces; stepping onto an opponent is a capture and is kept.
///
/// # Errors
///
/// `Precondition` when `origin` is off the board or empty, holds a different
/// piece, or `piece` is not owned by `acting_player`. These are checked before
/// any candidate is produced.
#[instrument(skip_all, fields(%piece, %origin, %acting_player))]
pub fn generate_moves(
    board: &Board,
    piece: Piece,
    origin: Coord,
    acting_player: Player,
) -> Result<Vec<CandidateMove>, RulesError> {
    check_preconditions(board, piece, origin, acting_player)?;

    let moves: Vec<CandidateMove> = piece
        .kind()
        .directions()
        .iter()
        .filter_map(|&direction| {
            let destination = origin.offset(direction.offset(acting_player));
            let open = board.is_in_bounds(destination)
                && !board.is_friendly(destination, acting_player);
            open.then(|| CandidateMove::new(direction, destination))
        })
        .collect();

    debug!(count = moves.len(), "Generated candidate moves");
    Ok(moves)
}

fn check_preconditions(
    board: &Board,
    piece: Piece,
    origin: Coord,
    acting_player: Player,
) -> Result<(), RulesError> {
    let reason = match board.occupant_at(origin) {
        Err(_) => Some(Precondition::OriginOutOfBounds(origin)),
        Ok(None) => Some(Precondition::OriginEmpty(origin)),
        Ok(Some(found)) if found != piece => Some(Precondition::PieceMismatch {
            expected: piece,
            found,
        }),
        Ok(Some(_)) if piece.owner() != acting_player => Some(Precondition::NotOwner {
            piece,
            player: acting_player,
        }),
        Ok(Some(_)) => None,
    };

    match reason {
        Some(reason) => {
            warn!(%reason, "Rejected move generation request");
            Err(reason.into())
        }
        None => Ok(()),
    }
}

/// Looks up the piece on `origin` and generates its candidates.
///
/// # Errors
///
/// Same as [`generate_moves`].
#[instrument(skip_all, fields(%origin, %acting_player))]
pub fn moves_at(
    board: &Board,
    origin: Coord,
    acting_player: Player,
) -> Result<(Piece, Vec<CandidateMove>), RulesError> {
    let piece = match board.occupant_at(origin) {
        Ok(Some(piece)) => piece,
        Ok(None) => return Err(Precondition::OriginEmpty(origin).into()),
        Err(_) => return Err(Precondition::OriginOutOfBounds(origin).into()),
    };
    let moves = generate_moves(board, piece, origin, acting_player)?;
    Ok((piece, moves))
}

/// Checks a move request against the board and returns the candidate it selects.
///
/// # Errors
///
/// `PieceNotOnBoard` if the piece is absent, `IllegalDirection` if the
/// direction is not among its candidates, or any [`generate_moves`]
/// precondition.
#[instrument(skip_all, fields(%request, %acting_player))]
pub fn validate_move(
    board: &Board,
    request: MoveRequest,
    acting_player: Player,
) -> Result<CandidateMove, RulesError> {
    let origin = board
        .locate(request.piece)
        .ok_or(Precondition::PieceNotOnBoard(request.piece))?;

    generate_moves(board, request.piece, origin, acting_player)?
        .into_iter()
        .find(|mv| mv.direction == request.direction)
        .ok_or_else(|| {
            Precondition::IllegalDirection {
                piece: request.piece,
                direction: request.direction,
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn place(cells: &[((i32, i32), Piece)]) -> Board {
        cells.iter().fold(Board::new(), |board, &((r, c), piece)| {
            board.with_piece(Coord::new(r, c), piece).unwrap()
        })
    }

    fn pairs(moves: &[CandidateMove]) -> Vec<(Direction, (i32, i32))> {
        moves
            .iter()
            .map(|m| (m.direction, (m.destination.row, m.destination.col)))
            .collect()
    }

    #[test]
    fn test_pawn_in_open_board() {
        let pawn = Piece::pawn(Player::A, 1).unwrap();
        let board = place(&[((1, 2), pawn)]);
        let moves = generate_moves(&board, pawn, Coord::new(1, 2), Player::A).unwrap();
        assert_eq!(
            pairs(&moves),
            vec![
                (Direction::Left, (1, 1)),
                (Direction::Right, (1, 3)),
                (Direction::Forward, (2, 2)),
                (Direction::Back, (0, 2)),
            ]
        );
    }

    #[test]
    fn test_pawn_on_edge_row_drops_back() {
        let pawn = Piece::pawn(Player::A, 1).unwrap();
        let board = place(&[((0, 2), pawn)]);
        let moves = generate_moves(&board, pawn, Coord::new(0, 2), Player::A).unwrap();
        assert_eq!(
            pairs(&moves),
            vec![
                (Direction::Left, (0, 1)),
                (Direction::Right, (0, 3)),
                (Direction::Forward, (1, 2)),
            ]
        );
    }

    #[test]
    fn test_hero2_captures_but_skips_friendly() {
        let hero = Piece::hero2(Player::A);
        let board = place(&[
            ((2, 2), hero),
            ((3, 3), Piece::pawn(Player::B, 1).unwrap()),
            ((1, 1), Piece::pawn(Player::A, 1).unwrap()),
        ]);
        let moves = generate_moves(&board, hero, Coord::new(2, 2), Player::A).unwrap();
        let pairs = pairs(&moves);
        assert!(pairs.contains(&(Direction::ForwardRight, (3, 3))));
        assert!(!pairs.contains(&(Direction::BackLeft, (1, 1))));
        assert_eq!(
            pairs,
            vec![
                (Direction::ForwardLeft, (3, 1)),
                (Direction::ForwardRight, (3, 3)),
                (Direction::BackRight, (1, 3)),
            ]
        );
    }

    #[test]
    fn test_empty_origin_is_precondition_error() {
        let board = Board::new();
        let result = generate_moves(&board, Piece::pawn(Player::A, 1).unwrap(), Coord::new(2, 2), Player::A);
        assert_eq!(
            result,
            Err(RulesError::Precondition(Precondition::OriginEmpty(Coord::new(2, 2))))
        );
    }

    #[test]
    fn test_surrounded_hero1_has_no_moves() {
        let hero = Piece::hero1(Player::B);
        let board = place(&[
            ((2, 2), hero),
            ((2, 1), Piece::pawn(Player::B, 1).unwrap()),
            ((2, 3), Piece::pawn(Player::B, 2).unwrap()),
            ((1, 2), Piece::pawn(Player::B, 3).unwrap()),
            ((3, 2), Piece::hero2(Player::B)),
        ]);
        let moves = generate_moves(&board, hero, Coord::new(2, 2), Player::B).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_player_b_forward_points_up() {
        let pawn = Piece::pawn(Player::B, 2).unwrap();
        let board = place(&[((4, 0), pawn)]);
        let moves = generate_moves(&board, pawn, Coord::new(4, 0), Player::B).unwrap();
        assert_eq!(
            pairs(&moves),
            vec![(Direction::Right, (4, 1)), (Direction::Forward, (3, 0))]
        );
    }

    #[test]
    fn test_other_preconditions() {
        let pawn = Piece::pawn(Player::A, 1).unwrap();
        let board = place(&[((1, 1), pawn)]);

        assert_eq!(
            generate_moves(&board, pawn, Coord::new(-1, 1), Player::A),
            Err(RulesError::from(Precondition::OriginOutOfBounds(Coord::new(-1, 1))))
        );
        assert_eq!(
            generate_moves(&board, Piece::hero1(Player::A), Coord::new(1, 1), Player::A),
            Err(RulesError::from(Precondition::PieceMismatch {
                expected: Piece::hero1(Player::A),
                found: pawn,
            }))
        );
        assert_eq!(
            generate_moves(&board, pawn, Coord::new(1, 1), Player::B),
            Err(RulesError::from(Precondition::NotOwner {
                piece: pawn,
                player: Player::B,
            }))
        );
    }

    #[test]
    fn test_board_is_untouched() {
        let hero = Piece::hero2(Player::A);
        let board = place(&[((2, 2), hero), ((3, 3), Piece::pawn(Player::B, 1).unwrap())]);
        let before = board.clone();
        let _ = generate_moves(&board, hero, Coord::new(2, 2), Player::A).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_moves_at_looks_up_piece() {
        let hero = Piece::hero1(Player::A);
        let board = place(&[((0, 0), hero)]);
        let (piece, moves) = moves_at(&board, Coord::new(0, 0), Player::A).unwrap();
        assert_eq!(piece, hero);
        assert_eq!(moves.len(), 2);
        assert!(matches!(
            moves_at(&board, Coord::new(4, 4), Player::A),
            Err(RulesError::Precondition(Precondition::OriginEmpty(_)))
        ));
        assert!(matches!(
            moves_at(&board, Coord::new(7, 0), Player::A),
            Err(RulesError::Precondition(Precondition::OriginOutOfBounds(_)))
        ));
    }

    #[test]
    fn test_validate_move() {
        let hero = Piece::hero2(Player::B);
        let board = place(&[((4, 4), hero)]);

        let mv = validate_move(&board, MoveRequest::new(hero, Direction::ForwardRight), Player::B)
            .unwrap();
        assert_eq!(mv.destination, Coord::new(3, 3));

        assert_eq!(
            validate_move(&board, MoveRequest::new(hero, Direction::BackLeft), Player::B),
            Err(RulesError::from(Precondition::IllegalDirection {
                piece: hero,
                direction: Direction::BackLeft,
            }))
        );
        assert_eq!(
            validate_move(
                &board,
                MoveRequest::new(Piece::hero1(Player::B), Direction::Left),
                Player::B
            ),
            Err(RulesError::from(Precondition::PieceNotOnBoard(Piece::hero1(Player::B))))
        );
    }
}
