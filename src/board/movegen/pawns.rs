use super::super::{Bitboard, Board, Piece, Square};

/// Pawn destinations.
///
/// One step forward onto an empty square; two steps forward when the pawn
/// still stands on its origin and the landing square is empty (the square in
/// between is not inspected); a forward diagonal only when an enemy piece is
/// there to capture.
#[must_use]
pub fn pawn_moves(pawn: Piece, from: Square, board: &Board) -> Bitboard {
    let color = pawn.color();
    let dir = color.pawn_direction();
    let mut moves = Bitboard::EMPTY;

    if let Some(forward) = from.offset(dir, 0) {
        if board.is_empty(forward) {
            moves.insert(forward);
        }
    }

    if pawn.origin() == Some(from) {
        if let Some(double) = from.offset(2 * dir, 0) {
            if board.is_empty(double) {
                moves.insert(double);
            }
        }
    }

    for df in [-1, 1] {
        if let Some(target) = from.offset(dir, df) {
            if board.occupied_by(color.opponent()).contains(target) {
                moves.insert(target);
            }
        }
    }

    moves
}
