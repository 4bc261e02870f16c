//! Error types for engine operations.

use std::fmt;

use super::state::Status;
use super::types::Square;

/// Error type for square construction and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank coordinate outside [0, 8)
    RankOutOfBounds { rank: usize },
    /// File coordinate outside [0, 8)
    FileOutOfBounds { file: usize },
    /// Square notation is not of the form "a1".."h8"
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for refused move requests.
///
/// A refused request leaves the game state untouched; the caller may
/// treat it as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The destination is not in the legal set for the source square
    Illegal { from: Square, to: Square },
    /// The game has already ended; only undo can revive it
    GameOver { status: Status },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::GameOver { status } => {
                write!(f, "No moves may be applied: {status}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string is missing the side-to-move field
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Too many ranks in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}
