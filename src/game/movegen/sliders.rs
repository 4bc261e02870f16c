use super::super::types::{Square, TargetList};
use super::super::Board;

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Walk each ray until the board edge, an own piece (stop before), or
    /// an opposing piece (include, then stop).
    pub(crate) fn sliding_targets(
        &self,
        from: Square,
        directions: &[(isize, isize)],
    ) -> TargetList {
        let mut targets = TargetList::new();
        let own_color = self.color_on(from);

        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.color_on(to) {
                    None => targets.push(to),
                    Some(color) => {
                        if Some(color) != own_color {
                            targets.push(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }

        targets
    }
}
