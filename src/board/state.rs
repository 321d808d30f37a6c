#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Color, Piece, PieceKind, Square};

/// Back rank layout from file a to file h.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square-to-piece occupancy map.
///
/// The mailbox array is the source of truth; the per-color bitboards mirror
/// it and are only touched through `set_piece`/`remove_piece`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<(Square, Piece)>", into = "Vec<(Square, Piece)>")
)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) occupied: [Bitboard; 2],
}

impl Board {
    /// The standard initial layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let back_sq = Square(back, file);
                let pawn_sq = Square(pawns, file);
                board.set_piece(back_sq, Piece::placed(color, kind, back_sq));
                board.set_piece(pawn_sq, Piece::pawn(color, pawn_sq));
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            occupied: [Bitboard::EMPTY; 2],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of `color` and `kind` on the board.
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> u8 {
        self.pieces()
            .filter(|(_, p)| p.color() == color && p.kind() == kind)
            .count() as u8
    }

    /// Put `piece` on `sq`, returning whatever was there.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove_piece(sq);
        self.squares[sq.index()] = Some(piece);
        self.occupied[piece.color().index()].insert(sq);
        previous
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let previous = self.squares[sq.index()].take();
        if let Some(piece) = previous {
            self.occupied[piece.color().index()].remove(sq);
        }
        previous
    }

    /// Move the occupant of `from` to `to`, returning the piece that was
    /// captured on `to`. Does nothing when `from` is empty.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove_piece(from)?;
        self.set_piece(to, piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl From<Vec<(Square, Piece)>> for Board {
    fn from(placements: Vec<(Square, Piece)>) -> Self {
        let mut board = Board::empty();
        for (sq, piece) in placements {
            board.set_piece(sq, piece);
        }
        board
    }
}

impl From<Board> for Vec<(Square, Piece)> {
    fn from(board: Board) -> Self {
        board.pieces().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(Square(0, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square(7, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(Square(6, 0)),
            Some(Piece::pawn(Color::Black, Square(6, 0)))
        );
        for rank in 2..6 {
            for file in 0..8 {
                assert!(board.is_empty(Square(rank, file)));
            }
        }
    }

    #[test]
    fn test_initial_counts_match_complement() {
        let board = Board::new();
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                assert_eq!(board.count(color, kind), kind.initial_count());
            }
        }
    }

    #[test]
    fn test_occupancy_tracks_mailbox() {
        let board = Board::new();
        assert_eq!(board.occupied_by(Color::White), Bitboard::RANK_1 | Bitboard::RANK_2);
        assert_eq!(board.occupied_by(Color::Black), Bitboard::RANK_7 | Bitboard::RANK_8);
        assert_eq!(board.all_occupied().len(), 32);
    }

    #[test]
    fn test_relocate_returns_capture() {
        let mut board = Board::new();
        let a1 = Square(0, 0);
        let a7 = Square(6, 0);

        let captured = board.relocate(a1, a7);
        assert_eq!(captured, Some(Piece::pawn(Color::Black, a7)));
        assert!(board.is_empty(a1));
        assert_eq!(
            board.piece_at(a7),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert!(board.occupied_by(Color::White).contains(a7));
        assert!(!board.occupied_by(Color::Black).contains(a7));
        assert!(!board.occupied_by(Color::White).contains(a1));
    }

    #[test]
    fn test_relocate_from_empty_is_noop() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.relocate(Square(3, 3), Square(4, 4)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_placement_list_round_trip() {
        let board = Board::new();
        let placements: Vec<(Square, Piece)> = board.clone().into();
        assert_eq!(Board::from(placements), board);
    }
}
