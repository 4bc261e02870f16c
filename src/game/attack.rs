//! Check detection.
//!
//! Built on pseudo-move generation run from the opponent's perspective: a
//! king is in check iff some opposing piece's unfiltered pseudo-targets
//! include its square. The board is 64 squares, so the full scan is cheap
//! and needs no attack tables.

use super::types::{Color, Piece, Square};
use super::Board;

impl Board {
    /// Locate the king of the given color.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Whether the given color's king is attacked.
    ///
    /// A board without that king reports "not in check". The state machine
    /// never produces such a board (kings can only leave via an illegal
    /// move, which is refused first), so this is a defensive fallback for
    /// hand-built positions rather than an invariant check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            return false;
        };

        self.occupied()
            .filter(|&(_, c, _)| c != color)
            .any(|(sq, _, _)| self.pseudo_targets(sq).contains(king_sq))
    }
}
