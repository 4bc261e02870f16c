use super::super::types::{Square, TargetList};
use super::super::Board;

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn knight_targets(&self, from: Square) -> TargetList {
        self.step_targets(from, &KNIGHT_OFFSETS)
    }
}
