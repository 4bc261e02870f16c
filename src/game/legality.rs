//! Legality filtering: pseudo-moves minus those that expose the own king.
//!
//! Each candidate is simulated on a throwaway copy of the `Copy` board
//! value. Compared to mutate-then-revert on the live board, the copy can
//! never be left half-restored by an early return, and a reader holding
//! the real board never observes a simulation in progress.

use super::types::{Color, Square, TargetList};
use super::Board;

impl Board {
    /// Whether moving `from` to `to` would leave `color`'s king attacked.
    ///
    /// The simulation moves the piece verbatim; promotion is irrelevant to
    /// the check test because a pawn and a queen on the arrival square
    /// shield the king identically.
    fn exposes_king(&self, from: Square, to: Square, color: Color) -> bool {
        let mut sim = *self;
        let _ = sim.move_piece(from, to);
        sim.is_in_check(color)
    }

    /// The legal destinations of the piece on `from`: its pseudo-targets
    /// with every move that leaves the mover's own king in check removed.
    /// Empty for an empty square.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> TargetList {
        let mut legal = TargetList::new();
        let Some((color, _)) = self.piece_at(from) else {
            return legal;
        };

        for &to in &self.pseudo_targets(from) {
            if !self.exposes_king(from, to, color) {
                legal.push(to);
            }
        }
        legal
    }

    /// Whether the given color has at least one legal move anywhere.
    ///
    /// Scans all 64 squares; returns as soon as one occupied square yields
    /// a non-empty legal set.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.occupied()
            .filter(|&(_, c, _)| c == color)
            .any(|(sq, _, _)| !self.legal_targets(sq).is_empty())
    }
}
