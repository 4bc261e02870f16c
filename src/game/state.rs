//! Game state machine: side to move, status, history, captured pieces.
//!
//! `Game` owns the board exclusively. All mutation goes through
//! [`Game::apply_move`], [`Game::undo`], and [`Game::reset`]; each takes
//! `&mut self` and completes fully before returning, so a caller can
//! never observe a half-applied move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::types::{Color, MoveRecord, MoveTarget, Piece, Square};
use super::Board;

/// Game status.
///
/// Transitions only from `Playing` to a terminal state; the sole way back
/// is [`Game::undo`], which revives the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Playing,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl Status {
    /// Returns true if the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Status::Playing)
    }

    /// The winning color, if the game ended in checkmate
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::WhiteWins => Some(Color::White),
            Status::BlackWins => Some(Color::Black),
            Status::Playing | Status::Stalemate => None,
        }
    }

    /// Determine the status of a position with `side_to_move` to play.
    ///
    /// No legal move while in check is a win for the opponent; no legal
    /// move otherwise is stalemate.
    #[must_use]
    pub fn compute(board: &Board, side_to_move: Color) -> Status {
        if board.has_any_legal_move(side_to_move) {
            return Status::Playing;
        }
        if board.is_in_check(side_to_move) {
            match side_to_move {
                Color::White => Status::BlackWins,
                Color::Black => Status::WhiteWins,
            }
        } else {
            Status::Stalemate
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Playing => write!(f, "playing"),
            Status::WhiteWins => write!(f, "white wins by checkmate"),
            Status::BlackWins => write!(f, "black wins by checkmate"),
            Status::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Captured pieces, bucketed by the captured piece's own color in the
/// order they fell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// The captured pieces of the given color, oldest first
    #[must_use]
    pub fn of_color(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn bucket_mut(&mut self, color: Color) -> &mut Vec<Piece> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn push(&mut self, color: Color, piece: Piece) {
        self.bucket_mut(color).push(piece);
    }

    /// Remove one entry matching the piece type, if present
    fn remove_one(&mut self, color: Color, piece: Piece) {
        let bucket = self.bucket_mut(color);
        if let Some(idx) = bucket.iter().position(|&p| p == piece) {
            bucket.remove(idx);
        }
    }

    fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}

/// Read-only projection of the game state handed to the presentation
/// layer for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub board: Board,
    pub current_player: Color,
    pub status: Status,
    pub captured: CapturedPieces,
}

/// The authoritative game state and the operations that mutate it.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Color,
    status: Status,
    history: Vec<MoveRecord>,
    captured: CapturedPieces,
}

impl Game {
    /// Start a new game: standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Board::new(), Color::White)
    }

    /// Wrap an arbitrary position. The status is computed on entry, so a
    /// constructed mate or stalemate is reported immediately.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        let status = Status::compute(&board, side_to_move);
        Game {
            board,
            current_player: side_to_move,
            status,
            history: Vec::new(),
            captured: CapturedPieces::default(),
        }
    }

    /// Reset to the standard initial position, discarding history and
    /// captured pieces.
    pub fn reset(&mut self) {
        *self = Game::new();
        #[cfg(feature = "logging")]
        log::debug!("new game started");
    }

    /// The current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// The game status
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Applied moves, oldest first
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The captured pieces of the given color, oldest first
    #[must_use]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.captured.of_color(color)
    }

    /// An owned snapshot of everything the presentation layer renders
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            captured: self.captured.clone(),
        }
    }

    /// The legal destinations of the piece on `from`, with capture flags
    /// for highlighting.
    ///
    /// Empty when the square is empty, the piece belongs to the opponent,
    /// or the game is over.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<MoveTarget> {
        if self.status.is_over() || self.board.color_on(from) != Some(self.current_player) {
            return Vec::new();
        }
        self.board
            .legal_targets(from)
            .into_iter()
            .map(|square| MoveTarget {
                square,
                is_capture: !self.board.is_empty(square),
            })
            .collect()
    }

    /// Whether moving `from` to `to` is legal for the side to move
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.legal_moves(from).iter().any(|t| t.square == to)
    }

    /// Apply a move.
    ///
    /// Refuses with [`MoveError::GameOver`] once the game has ended and
    /// with [`MoveError::Illegal`] when `to` is not in the legal set of
    /// `from`; on `Err` the state is untouched. On success the move record
    /// is appended, a captured piece is bucketed under its own color, a
    /// pawn reaching its last rank becomes a queen, the turn flips, and
    /// the status is recomputed.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Snapshot, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }
        if !self.is_legal(from, to) {
            return Err(MoveError::Illegal { from, to });
        }

        // is_legal guarantees a piece of the current player on `from`.
        let piece = self.board.piece_at(from).ok_or(MoveError::Illegal { from, to })?;
        let captured = self.board.piece_at(to);

        self.history.push(MoveRecord {
            from,
            to,
            piece,
            captured,
        });
        if let Some((color, piece)) = captured {
            self.captured.push(color, piece);
        }

        let _ = self.board.move_piece(from, to);

        // Auto-promotion: no underpromotion choice, always a queen.
        let (color, moved) = piece;
        if moved == Piece::Pawn && to.rank() == color.promotion_rank() {
            self.board.set_piece(to, color, Piece::Queen);
        }

        self.current_player = self.current_player.opponent();
        self.status = Status::compute(&self.board, self.current_player);

        #[cfg(feature = "logging")]
        {
            log::debug!("applied {from}{to}, {} to move", self.current_player);
            if self.status.is_over() {
                log::debug!("game over: {}", self.status);
            }
        }

        Ok(self.snapshot())
    }

    /// Undo the last applied move, returning its record, or `None` when
    /// the history is empty.
    ///
    /// Restores both squares from the record's snapshots, removes one
    /// matching entry from the captured bucket, flips the turn back, and
    /// resets the status to `Playing` unconditionally. Undo is permitted
    /// after game end and revives the game; only the immediately
    /// preceding ply is reversible.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        let (color, piece) = record.piece;
        self.board.set_piece(record.from, color, piece);
        match record.captured {
            Some((captured_color, captured_piece)) => {
                self.board
                    .set_piece(record.to, captured_color, captured_piece);
                self.captured.remove_one(captured_color, captured_piece);
            }
            None => self.board.clear_square(record.to),
        }

        self.current_player = self.current_player.opponent();
        self.status = Status::Playing;

        #[cfg(feature = "logging")]
        log::debug!("undid {record}, {} to move", self.current_player);

        Some(record)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
