//! Core value types: squares, pieces, and move records.

mod moves;
mod piece;
mod square;

pub use moves::{MoveRecord, MoveTarget, TargetList, TargetListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
