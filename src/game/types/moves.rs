//! Move records, highlight targets, and the destination list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// One entry of the history: everything needed to reverse exactly one ply.
///
/// `piece` and `captured` are snapshots taken before the move was applied,
/// so undoing a promotion restores the pawn, not the queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.captured.is_some() {
            write!(f, "x")?;
        }
        Ok(())
    }
}

/// A legal destination paired with its capture flag, the projection the
/// presentation layer consumes for move highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveTarget {
    pub square: Square,
    pub is_capture: bool,
}

/// A single piece never has more destinations than a centralized queen.
pub(crate) const MAX_TARGETS: usize = 32;

const EMPTY_SQUARE: Square = Square(0, 0);

/// List of destination squares with a fixed-size backing array.
#[derive(Clone, Copy, Debug)]
pub struct TargetList {
    squares: [Square; MAX_TARGETS],
    len: usize,
}

impl TargetList {
    pub(crate) fn new() -> Self {
        TargetList {
            squares: [EMPTY_SQUARE; MAX_TARGETS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for TargetList {
    fn default() -> Self {
        TargetList::new()
    }
}

/// Owning iterator over squares in a `TargetList`
pub struct TargetListIntoIter {
    list: TargetList,
    idx: usize,
}

impl Iterator for TargetListIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let sq = self.list.squares[self.idx];
            self.idx += 1;
            Some(sq)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TargetListIntoIter {}

impl IntoIterator for TargetList {
    type Item = Square;
    type IntoIter = TargetListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        TargetListIntoIter { list: self, idx: 0 }
    }
}
