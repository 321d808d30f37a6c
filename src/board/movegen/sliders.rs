use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Bitboard, Board, Color, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

/// Squares along one ray from `from`, stopping at the board edge, at the
/// first enemy piece (included) or before the first friendly piece.
fn ray(color: Color, from: Square, board: &Board, (dr, df): (isize, isize)) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    let mut current = from;
    while let Some(next) = current.offset(dr, df) {
        match board.piece_at(next) {
            None => targets.insert(next),
            Some(blocker) => {
                if blocker.color() != color {
                    targets.insert(next);
                }
                break;
            }
        }
        current = next;
    }
    targets
}

pub(crate) fn slider_moves(
    color: Color,
    from: Square,
    board: &Board,
    slider: SliderType,
) -> Bitboard {
    slider
        .directions()
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray(color, from, board, dir))
}

/// Rook destinations: the four orthogonal rays.
#[must_use]
pub fn rook_moves(color: Color, from: Square, board: &Board) -> Bitboard {
    slider_moves(color, from, board, SliderType::Rook)
}

/// Bishop destinations: the four diagonal rays.
#[must_use]
pub fn bishop_moves(color: Color, from: Square, board: &Board) -> Bitboard {
    slider_moves(color, from, board, SliderType::Bishop)
}

/// Queen destinations: rook and bishop rays together.
#[must_use]
pub fn queen_moves(color: Color, from: Square, board: &Board) -> Bitboard {
    slider_moves(color, from, board, SliderType::Queen)
}
