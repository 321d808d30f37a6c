//! Move rejection reasons.

use std::fmt;

use crate::board::{Color, Square, SquareError};

use super::Outcome;

/// Why a move was not applied. The game state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already been won
    GameOver { outcome: Outcome },
    /// Nothing stands on the source square
    EmptySquare { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongColor { square: Square, color: Color },
    /// The destination is not reachable for that piece right now
    IllegalDestination { from: Square, to: Square },
    /// Square notation could not be parsed
    InvalidSquare(SquareError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver { outcome } => write!(f, "Game is over ({outcome})"),
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongColor { square, color } => {
                write!(f, "Piece on {square} belongs to {color}, who is not on move")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::InvalidSquare(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        MoveError::InvalidSquare(e)
    }
}
