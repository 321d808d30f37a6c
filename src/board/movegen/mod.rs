//! Per-kind destination generators.
//!
//! Every generator is a pure function of the piece, its square and the board
//! snapshot. Results honour blocking and never contain a square held by the
//! mover's own color; whose turn it is does not matter here.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::king_moves;
pub use knights::knight_moves;
pub use pawns::pawn_moves;
pub use sliders::{bishop_moves, queen_moves, rook_moves};

use log::trace;

use super::{Bitboard, Board, Color, Piece, PieceKind, Square};

/// Destinations for `piece` standing on `from`.
#[must_use]
pub fn destinations(piece: Piece, from: Square, board: &Board) -> Bitboard {
    let color = piece.color();
    let moves = match piece.kind() {
        PieceKind::King => king_moves(color, from, board),
        PieceKind::Queen => queen_moves(color, from, board),
        PieceKind::Bishop => bishop_moves(color, from, board),
        PieceKind::Knight => knight_moves(color, from, board),
        PieceKind::Rook => rook_moves(color, from, board),
        PieceKind::Pawn => pawn_moves(piece, from, board),
    };
    trace!("{piece} on {from}: {moves:?}");
    moves
}

impl Board {
    /// Destinations for whatever stands on `from`; empty for an empty square.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Bitboard {
        self.piece_at(from)
            .map_or(Bitboard::EMPTY, |piece| destinations(piece, from, self))
    }

    /// Total destinations available to every piece of `color`.
    #[must_use]
    pub fn mobility(&self, color: Color) -> usize {
        self.occupied_by(color)
            .iter()
            .map(|from| self.legal_destinations(from).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square_has_no_destinations() {
        let board = Board::new();
        assert!(board.legal_destinations(Square(3, 3)).is_empty());
    }

    #[test]
    fn test_starting_mobility() {
        // 16 pawn moves plus 4 knight moves per side.
        let board = Board::new();
        assert_eq!(board.mobility(Color::White), 20);
        assert_eq!(board.mobility(Color::Black), 20);
    }

    #[test]
    fn test_dispatch_matches_policy() {
        let board = Board::new();
        let knight = Square(0, 6);
        let piece = board.piece_at(knight).unwrap();
        assert_eq!(
            destinations(piece, knight, &board),
            knight_moves(Color::White, knight, &board)
        );
    }
}
