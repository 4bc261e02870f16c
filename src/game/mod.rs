//! Chess rules engine: board representation and game state.
//!
//! The engine is a plain in-process library. A presentation layer asks it
//! for the legal destinations of a square, requests a move, and reads back
//! a [`Snapshot`] of the updated state for rendering. The engine knows
//! nothing about any visual surface.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, Square};
//!
//! let mut game = Game::new();
//! let targets = game.legal_moves(Square(1, 4)); // the e2 pawn
//! assert_eq!(targets.len(), 2);
//! game.apply_move(Square(1, 4), Square(3, 4)).unwrap(); // e4
//! ```

mod attack;
mod board;
mod builder;
mod error;
mod fen;
mod legality;
mod movegen;
pub mod prelude;
mod shared;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use shared::SharedGame;
pub use state::{CapturedPieces, Game, Snapshot, Status};
pub use types::{Color, MoveRecord, MoveTarget, Piece, Square, TargetList, TargetListIntoIter};
