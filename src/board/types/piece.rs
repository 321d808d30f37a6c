//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Rook => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Number of pieces of this kind each side starts with.
    #[inline]
    #[must_use]
    pub const fn initial_count(self) -> u8 {
        match self {
            PieceKind::King | PieceKind::Queen => 1,
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook => 2,
            PieceKind::Pawn => 8,
        }
    }

    /// Board glyph without the color prefix.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "Kn",
            PieceKind::Rook => "R",
            PieceKind::Pawn => "p",
        }
    }

    /// Returns true if this piece slides along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// Player colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn prefix(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board.
///
/// Pieces never change once created. Pawns remember the square they were
/// placed on, which is what makes the two-square advance available; moving a
/// pawn relocates it without touching `origin`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    origin: Option<Square>,
}

impl Piece {
    /// A non-pawn piece. Pawns built this way never get the double step;
    /// use [`Piece::pawn`] to give them an origin.
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            origin: None,
        }
    }

    /// A pawn whose first-move square is `origin`.
    #[must_use]
    pub const fn pawn(color: Color, origin: Square) -> Self {
        Piece {
            color,
            kind: PieceKind::Pawn,
            origin: Some(origin),
        }
    }

    /// The piece that belongs on `square` when it is first placed there.
    #[must_use]
    pub(crate) const fn placed(color: Color, kind: PieceKind, square: Square) -> Self {
        match kind {
            PieceKind::Pawn => Piece::pawn(color, square),
            _ => Piece::new(color, kind),
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Square a pawn started on; `None` for other kinds.
    #[inline]
    #[must_use]
    pub const fn origin(self) -> Option<Square> {
        self.origin
    }

    /// Color-prefixed glyph, e.g. `wK`, `bKn`, `wp`.
    #[must_use]
    pub fn symbol(self) -> String {
        format!("{}{}", self.color.prefix(), self.kind.glyph())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counts_total_sixteen() {
        let total: u8 = PieceKind::ALL.iter().map(|k| k.initial_count()).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn test_kind_indices_are_distinct() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Piece::new(Color::White, PieceKind::King).symbol(), "wK");
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).symbol(), "bKn");
        assert_eq!(Piece::pawn(Color::White, Square(1, 0)).symbol(), "wp");
    }

    #[test]
    fn test_placed_records_origin_for_pawns_only() {
        let sq = Square(1, 4);
        assert_eq!(
            Piece::placed(Color::White, PieceKind::Pawn, sq).origin(),
            Some(sq)
        );
        assert_eq!(Piece::placed(Color::White, PieceKind::Rook, sq).origin(), None);
    }

    #[test]
    fn test_opponent_is_involution() {
        for color in Color::BOTH {
            assert_ne!(color, color.opponent());
            assert_eq!(color, color.opponent().opponent());
        }
    }
}
