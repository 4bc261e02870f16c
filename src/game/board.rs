//! Board model: an 8x8 mailbox grid of optional pieces.
//!
//! The board is pure data. It answers occupancy queries and performs
//! unchecked piece placement; every notion of chess legality lives in the
//! move generator, check detector, and legality filter built on top.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Piece, Square};

/// An 8x8 grid of optional (color, piece) cells, indexed `[rank][file]`.
///
/// `Board` is `Copy`: the legality filter simulates candidate moves on a
/// throwaway copy rather than mutating and manually reverting the live
/// board.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Create a board with the standard initial position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            for color in Color::BOTH {
                board.set_piece(Square(color.back_rank(), file), color, piece);
                board.set_piece(
                    Square(color.pawn_start_rank(), file),
                    color,
                    Piece::Pawn,
                );
            }
        }
        board
    }

    /// Get the (color, piece) pair on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Returns true if the square holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece on a square, replacing whatever was there
    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    /// Remove whatever is on a square
    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        self.squares[sq.rank()][sq.file()] = None;
    }

    /// Move the contents of `from` to `to`, returning what `to` held.
    ///
    /// No legality checking and no promotion; callers are the legality
    /// filter's simulation and the state machine, which layer those rules
    /// on top.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) -> Option<(Color, Piece)> {
        let captured = self.squares[to.rank()][to.file()];
        self.squares[to.rank()][to.file()] = self.squares[from.rank()][from.file()];
        self.squares[from.rank()][from.file()] = None;
        captured
    }

    /// Iterate over all occupied squares with their contents
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => write!(f, "{}|", piece.to_fen_char(color))?,
                    None => write!(f, ".|")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}
