//! Engine tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-move generation
//! - `legality.rs` - Check detection, pins, and the legality filter
//! - `game_flow.rs` - Apply/undo/reset state machine behavior
//! - `endings.rs` - Checkmate and stalemate detection
//! - `proptest.rs` - Property-based tests

mod endings;
mod movegen;
