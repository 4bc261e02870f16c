//! Pseudo-legal move generation, dispatched on piece type.
//!
//! Every generator is a pure function of (board, square): it reads the
//! color from the piece on the square, never consults whose turn it is,
//! and never filters for check. Exposing the mover's own king is the
//! legality filter's concern.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Piece, Square, TargetList};
use super::Board;

pub(crate) use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

impl Board {
    /// All destinations consistent with the occupying piece's movement
    /// pattern and occupancy rules. Empty for an empty square.
    #[must_use]
    pub fn pseudo_targets(&self, from: Square) -> TargetList {
        match self.piece_on(from) {
            Some(Piece::Pawn) => self.pawn_targets(from),
            Some(Piece::Knight) => self.knight_targets(from),
            Some(Piece::Bishop) => self.sliding_targets(from, &BISHOP_DIRECTIONS),
            Some(Piece::Rook) => self.sliding_targets(from, &ROOK_DIRECTIONS),
            Some(Piece::Queen) => self.sliding_targets(from, &QUEEN_DIRECTIONS),
            Some(Piece::King) => self.king_targets(from),
            None => TargetList::new(),
        }
    }

    /// Shared occupancy rule for fixed-offset pieces (knight, king): a
    /// target is reachable iff in bounds and not occupied by a same-color
    /// piece.
    pub(crate) fn step_targets(&self, from: Square, offsets: &[(isize, isize)]) -> TargetList {
        let mut targets = TargetList::new();
        let own_color = self.color_on(from);
        for &(dr, df) in offsets {
            if let Some(to) = from.offset(dr, df) {
                if self.color_on(to) != own_color {
                    targets.push(to);
                }
            }
        }
        targets
    }
}
