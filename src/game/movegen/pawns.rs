use super::super::types::{Square, TargetList};
use super::super::Board;

impl Board {
    pub(crate) fn pawn_targets(&self, from: Square) -> TargetList {
        let mut targets = TargetList::new();
        let Some((color, _)) = self.piece_at(from) else {
            return targets;
        };
        let dir = color.pawn_direction();

        // Single push, and the double push from the starting rank only
        // when both intervening squares are empty.
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                targets.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        // Diagonal captures require an opposing piece on the target; there
        // is no en passant, so a capture onto an empty diagonal never
        // exists.
        for df in [-1, 1] {
            if let Some(diag) = from.offset(dir, df) {
                if let Some((target_color, _)) = self.piece_at(diag) {
                    if target_color != color {
                        targets.push(diag);
                    }
                }
            }
        }

        targets
    }
}
