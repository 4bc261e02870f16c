//! FEN piece-placement parsing and printing.
//!
//! Only the placement and side-to-move fields are meaningful here: the
//! engine tracks no castling rights, en passant target, or move clocks.
//! Any further fields are accepted and ignored, so full FEN strings from
//! other tools parse unchanged.

use super::error::FenError;
use super::state::Game;
use super::types::{Color, Piece, Square};
use super::Board;

impl Board {
    /// Parse the piece-placement field of a FEN string.
    pub fn try_from_fen(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();

        for (rank_idx, rank_str) in placement.split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    // FEN lists rank 8 first.
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        Ok(board)
    }

    /// Render the piece-placement field of a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push(char::from_digit(empty, 10).unwrap_or('0'));
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from_digit(empty, 10).unwrap_or('0'));
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }
}

impl Game {
    /// Construct a game from a FEN string (placement and side to move;
    /// later fields are ignored). The status is computed on entry.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = Board::try_from_fen(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(Game::from_position(board, side_to_move))
    }
}
