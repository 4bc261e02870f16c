//! Prelude module for convenient imports.
//!
//! Re-exports the types a typical embedder needs.
//!
//! # Example
//! ```
//! use chess_rules::game::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, FenError, Game, MoveError, MoveRecord, MoveTarget, Piece,
    SharedGame, Snapshot, Square, SquareError, Status,
};
