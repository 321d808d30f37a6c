use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Color, Square};

/// Knight destinations. Knights jump, so only the landing square matters.
#[must_use]
pub fn knight_moves(color: Color, from: Square, board: &Board) -> Bitboard {
    KNIGHT_ATTACKS[from.index()] & !board.occupied_by(color)
}
