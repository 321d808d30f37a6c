pub mod board;
pub mod cli;
pub mod game;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use game::{GameState, MoveError, Outcome};
