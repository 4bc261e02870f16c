//! Checkmate and stalemate detection tests.

use crate::game::{Color, Game, MoveError, Square, Status};

/// 1.f3 e5 2.g4 Qh4# — the fastest possible checkmate.
fn fools_mate() -> Game {
    let mut game = Game::new();
    game.apply_move(Square(1, 5), Square(2, 5)).unwrap(); // f3
    game.apply_move(Square(6, 4), Square(4, 4)).unwrap(); // e5
    game.apply_move(Square(1, 6), Square(3, 6)).unwrap(); // g4
    game.apply_move(Square(7, 3), Square(3, 7)).unwrap(); // Qh4#
    game
}

#[test]
fn fools_mate_ends_the_game_for_black() {
    let game = fools_mate();
    assert_eq!(game.status(), Status::BlackWins);
    assert_eq!(game.status().winner(), Some(Color::Black));
    assert!(game.status().is_over());
    assert!(game.board().is_in_check(Color::White));
}

#[test]
fn checkmated_side_has_zero_legal_moves() {
    let game = fools_mate();
    for sq in Square::all() {
        assert!(
            game.legal_moves(sq).is_empty(),
            "no move should be offered at {sq} after mate"
        );
    }
    assert!(!game.board().has_any_legal_move(Color::White));
}

#[test]
fn moves_after_game_end_are_refused() {
    let mut game = fools_mate();
    let before = game.snapshot();

    let err = game.apply_move(Square(1, 0), Square(2, 0)).unwrap_err();
    assert_eq!(
        err,
        MoveError::GameOver {
            status: Status::BlackWins
        }
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn undo_after_mate_revives_the_game() {
    let mut game = Game::new();
    game.apply_move(Square(1, 5), Square(2, 5)).unwrap();
    game.apply_move(Square(6, 4), Square(4, 4)).unwrap();
    game.apply_move(Square(1, 6), Square(3, 6)).unwrap();
    let before_mate = game.snapshot();

    game.apply_move(Square(7, 3), Square(3, 7)).unwrap();
    assert_eq!(game.status(), Status::BlackWins);

    game.undo().unwrap();
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.snapshot(), before_mate);
    assert!(!game.legal_moves(Square(7, 3)).is_empty());
}

#[test]
fn known_stalemate_position_is_detected() {
    // Black king cornered on h8 by queen f7 and king g6; not in check,
    // nowhere to go.
    let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(game.status(), Status::Stalemate);
    assert_eq!(game.status().winner(), None);
    assert!(!game.board().is_in_check(Color::Black));
    assert!(!game.board().has_any_legal_move(Color::Black));
}

#[test]
fn back_rank_mate_is_detected_on_entry() {
    let game = Game::from_fen("R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    assert_eq!(game.status(), Status::WhiteWins);
    assert!(game.board().is_in_check(Color::Black));
}

#[test]
fn check_alone_does_not_end_the_game() {
    // Scholar's-mate pattern one tempo early: the queen checks from f7
    // but is undefended, so the king simply takes it.
    let game = Game::from_fen("rnbqkbnr/pppppQpp/8/8/8/8/PPPPPPPP/RNB1KBNR b - - 0 1").unwrap();
    assert_eq!(game.status(), Status::Playing);
}

#[test]
fn stalemate_differs_from_checkmate_by_the_check_bit() {
    // Same material, one file apart: h7 is covered in one, not the other.
    let mate = Game::from_fen("7k/7Q/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(mate.status(), Status::WhiteWins);

    let stalemate = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(stalemate.status(), Status::Stalemate);
}
