//! Precomputed target tables for leaper pieces (knights, kings) and the ray
//! directions used by sliders.

use once_cell::sync::Lazy;

use super::{Bitboard, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Orthogonal ray directions as (rank delta, file delta).
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions as (rank delta, file delta).
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight directions; also the king's step pattern.
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (slot, from) in table.iter_mut().zip(Square::all()) {
        *slot = deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| leaper_table(&QUEEN_DIRECTIONS));
