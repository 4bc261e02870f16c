//! Per-piece pseudo-move generation tests.

use crate::game::{Board, BoardBuilder, Color, Piece, Square};

fn lone_piece(sq: Square, color: Color, piece: Piece) -> Board {
    BoardBuilder::new().piece(sq, color, piece).build()
}

#[test]
fn empty_square_has_no_targets() {
    let board = Board::new();
    assert!(board.pseudo_targets(Square(3, 3)).is_empty());
}

#[test]
fn pawn_single_and_double_from_start() {
    let board = Board::new();
    let targets = board.pseudo_targets(Square(1, 4));
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(Square(2, 4)));
    assert!(targets.contains(Square(3, 4)));
}

#[test]
fn black_pawn_moves_toward_rank_zero() {
    let board = Board::new();
    let targets = board.pseudo_targets(Square(6, 4));
    assert!(targets.contains(Square(5, 4)));
    assert!(targets.contains(Square(4, 4)));
}

#[test]
fn pawn_blocked_directly_ahead_cannot_move() {
    let board = BoardBuilder::new()
        .piece(Square(1, 4), Color::White, Piece::Pawn)
        .piece(Square(2, 4), Color::Black, Piece::Knight)
        .build();
    assert!(board.pseudo_targets(Square(1, 4)).is_empty());
}

#[test]
fn pawn_double_requires_both_squares_empty() {
    let board = BoardBuilder::new()
        .piece(Square(1, 4), Color::White, Piece::Pawn)
        .piece(Square(3, 4), Color::Black, Piece::Knight)
        .build();
    let targets = board.pseudo_targets(Square(1, 4));
    assert_eq!(targets.as_slice(), &[Square(2, 4)]);
}

#[test]
fn pawn_captures_diagonally_only_enemy_pieces() {
    let board = BoardBuilder::new()
        .piece(Square(3, 4), Color::White, Piece::Pawn)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .piece(Square(4, 5), Color::White, Piece::Knight)
        .build();
    let targets = board.pseudo_targets(Square(3, 4));
    assert!(targets.contains(Square(4, 4)), "forward square is empty");
    assert!(targets.contains(Square(4, 3)), "enemy pawn is capturable");
    assert!(
        !targets.contains(Square(4, 5)),
        "own piece is not capturable"
    );
}

#[test]
fn pawn_never_captures_onto_empty_diagonal() {
    let board = lone_piece(Square(3, 4), Color::White, Piece::Pawn);
    let targets = board.pseudo_targets(Square(3, 4));
    assert_eq!(targets.as_slice(), &[Square(4, 4)]);
}

#[test]
fn pawn_on_edge_file_does_not_wrap() {
    let board = BoardBuilder::new()
        .piece(Square(3, 0), Color::White, Piece::Pawn)
        .piece(Square(4, 1), Color::Black, Piece::Pawn)
        .build();
    let targets = board.pseudo_targets(Square(3, 0));
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(Square(4, 0)));
    assert!(targets.contains(Square(4, 1)));
}

#[test]
fn knight_has_eight_targets_from_center() {
    let board = lone_piece(Square(3, 3), Color::White, Piece::Knight);
    assert_eq!(board.pseudo_targets(Square(3, 3)).len(), 8);
}

#[test]
fn knight_has_two_targets_from_corner() {
    let board = lone_piece(Square(0, 0), Color::White, Piece::Knight);
    let targets = board.pseudo_targets(Square(0, 0));
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(Square(1, 2)));
    assert!(targets.contains(Square(2, 1)));
}

#[test]
fn knight_blocked_by_own_piece_but_captures_enemy() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Knight)
        .piece(Square(1, 2), Color::White, Piece::Pawn)
        .piece(Square(2, 1), Color::Black, Piece::Pawn)
        .build();
    let targets = board.pseudo_targets(Square(0, 0));
    assert_eq!(targets.as_slice(), &[Square(2, 1)]);
}

#[test]
fn rook_has_fourteen_targets_from_center_of_empty_board() {
    let board = lone_piece(Square(3, 3), Color::White, Piece::Rook);
    assert_eq!(board.pseudo_targets(Square(3, 3)).len(), 14);
}

#[test]
fn rook_stops_before_own_piece_and_on_enemy_piece() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(0, 3), Color::White, Piece::Bishop)
        .piece(Square(2, 0), Color::Black, Piece::Pawn)
        .build();
    let targets = board.pseudo_targets(Square(0, 0));
    assert!(targets.contains(Square(0, 1)));
    assert!(targets.contains(Square(0, 2)));
    assert!(!targets.contains(Square(0, 3)), "own piece blocks");
    assert!(targets.contains(Square(1, 0)));
    assert!(targets.contains(Square(2, 0)), "enemy piece is included");
    assert!(!targets.contains(Square(3, 0)), "ray stops after capture");
}

#[test]
fn bishop_has_thirteen_targets_from_center_of_empty_board() {
    let board = lone_piece(Square(3, 3), Color::White, Piece::Bishop);
    assert_eq!(board.pseudo_targets(Square(3, 3)).len(), 13);
}

#[test]
fn queen_is_union_of_rook_and_bishop_rays() {
    let board = lone_piece(Square(3, 3), Color::White, Piece::Queen);
    assert_eq!(board.pseudo_targets(Square(3, 3)).len(), 27);
}

#[test]
fn king_has_eight_targets_from_center_three_from_corner() {
    let center = lone_piece(Square(3, 3), Color::White, Piece::King);
    assert_eq!(center.pseudo_targets(Square(3, 3)).len(), 8);

    let corner = lone_piece(Square(7, 7), Color::Black, Piece::King);
    assert_eq!(corner.pseudo_targets(Square(7, 7)).len(), 3);
}

#[test]
fn starting_position_has_twenty_legal_moves_per_side() {
    let board = Board::new();
    for color in Color::BOTH {
        let total: usize = board
            .occupied()
            .filter(|&(_, c, _)| c == color)
            .map(|(sq, _, _)| board.legal_targets(sq).len())
            .sum();
        assert_eq!(total, 20, "{color} should have 20 legal moves");
    }
}
