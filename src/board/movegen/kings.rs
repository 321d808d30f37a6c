use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Board, Color, Square};

/// King destinations: the adjacent squares not held by a friendly piece.
#[must_use]
pub fn king_moves(color: Color, from: Square, board: &Board) -> Bitboard {
    KING_ATTACKS[from.index()] & !board.occupied_by(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_king_in_corner() {
        let board = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .build();
        let moves = king_moves(Color::Black, sq("h8"), &board);
        let expected: Bitboard = ["g8", "g7", "h7"].iter().map(|s| sq(s)).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_king_captures_but_skips_friends() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::King)
            .piece(sq("e5"), Color::Black, PieceKind::Pawn)
            .piece(sq("d4"), Color::White, PieceKind::Pawn)
            .build();
        let moves = king_moves(Color::White, sq("e4"), &board);
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(sq("e5")));
        assert!(!moves.contains(sq("d4")));
    }

    #[test]
    fn test_king_boxed_in_at_start() {
        let board = Board::new();
        assert!(king_moves(Color::White, sq("e1"), &board).is_empty());
        assert!(king_moves(Color::Black, sq("e8"), &board).is_empty());
    }
}
