//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN
//! strings, which keeps constructed test positions readable.
//!
//! # Example
//! ```
//! use chess_rules::game::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build();
//! ```

use super::state::Game;
use super::types::{Color, Piece, Square};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Add a piece to the position. Later placements on the same square
    /// overwrite earlier ones.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((sq, color, piece));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            board.set_piece(sq, color, piece);
        }
        board
    }

    /// Build a game around the position with the given side to move.
    ///
    /// The game status is computed on entry, so a constructed mate or
    /// stalemate is reported immediately.
    #[must_use]
    pub fn build_game(self, side_to_move: Color) -> Game {
        Game::from_position(self.build(), side_to_move)
    }
}
