//! Board representation and move generation.
//!
//! A `Board` maps squares to pieces; the `movegen` functions turn a piece, its
//! square and a board into the set of squares it may move to. There is no
//! notion of check, castling, en passant or promotion.
//!
//! # Example
//! ```
//! use varchess::board::{Board, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let targets: Vec<String> = board
//!     .legal_destinations(e2)
//!     .iter()
//!     .map(|sq| sq.to_string())
//!     .collect();
//! assert_eq!(targets, ["e3", "e4"]);
//! ```

mod attack_tables;
mod builder;
mod error;
pub mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::SquareError;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, Piece, PieceKind, Square};
