//! Core board types.
//!
//! - `Square` - a coordinate on the 8x8 grid
//! - `Color`, `PieceKind` and `Piece` - who owns a piece and how it moves
//! - `Bitboard` - a set of squares

mod bitboard;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
