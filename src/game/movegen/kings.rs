use super::super::types::{Square, TargetList};
use super::super::Board;

// No castling: the king's pattern is exactly the eight adjacent squares.
const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    pub(crate) fn king_targets(&self, from: Square) -> TargetList {
        self.step_targets(from, &KING_OFFSETS)
    }
}
