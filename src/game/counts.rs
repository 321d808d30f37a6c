#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceKind};

/// Remaining pieces per (color, kind).
///
/// A game is decided the moment a capture takes one of these to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceCounts {
    counts: [[u8; 6]; 2],
}

impl PieceCounts {
    /// The standard complement for both sides.
    #[must_use]
    pub fn initial() -> Self {
        let mut side = [0u8; 6];
        for kind in PieceKind::ALL {
            side[kind.index()] = kind.initial_count();
        }
        PieceCounts {
            counts: [side, side],
        }
    }

    /// Census of the pieces on `board`.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut counts = [[0u8; 6]; 2];
        for (_, piece) in board.pieces() {
            counts[piece.color().index()][piece.kind().index()] += 1;
        }
        PieceCounts { counts }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, color: Color, kind: PieceKind) -> u8 {
        self.counts[color.index()][kind.index()]
    }

    /// Total pieces `color` still has.
    #[must_use]
    pub fn total(&self, color: Color) -> u32 {
        self.counts[color.index()].iter().map(|&n| u32::from(n)).sum()
    }

    /// Record the capture of one `color` `kind`, returning how many remain.
    pub(crate) fn decrement(&mut self, color: Color, kind: PieceKind) -> u8 {
        let slot = &mut self.counts[color.index()][kind.index()];
        *slot = slot.saturating_sub(1);
        *slot
    }
}

impl Default for PieceCounts {
    fn default() -> Self {
        PieceCounts::initial()
    }
}
