//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece, mainly for tests and for
//! starting a game from something other than the standard layout.
//!
//! # Example
//! ```
//! use varchess::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().into(),
        }
    }

    /// Place a piece on the board. Pawns placed this way treat `square` as
    /// their origin.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::placed(color, kind, square))
    }

    /// Place a pawn that started on `origin` but now stands on `square`.
    #[must_use]
    pub fn moved_pawn(self, square: Square, color: Color, origin: Square) -> Self {
        self.place(square, Piece::pawn(color, origin))
    }

    /// Place an already-built piece.
    #[must_use]
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        Board::from(self.pieces)
    }
}
