//! Game state machine.
//!
//! `GameState` owns the board, the remaining-piece counts, the side on move,
//! the turn number and the outcome. `try_move` is the single mutation point:
//! it validates a move against the generator, applies it, books any capture
//! and decides the game once a side loses every piece of one kind.
//!
//! # Example
//! ```
//! use varchess::game::{GameState, Outcome};
//!
//! let mut game = GameState::new();
//! assert!(game.make_move("e2", "e4"));
//! assert!(!game.make_move("e4", "e5"), "white cannot move twice");
//! assert!(game.make_move("e7", "e5"));
//! assert_eq!(game.turn_number(), 2);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

mod counts;
mod error;
mod render;
#[cfg(feature = "serde")]
mod snapshot;


use std::fmt;

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Bitboard, Board, Color, Piece, Square, SquareError};

pub use counts::PieceCounts;
pub use error::MoveError;
pub use render::render;
#[cfg(feature = "serde")]
pub use snapshot::SnapshotError;

/// Whether the game is still running, and who won if not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    InProgress,
    WhiteWon,
    BlackWon,
}

impl Outcome {
    /// The terminal outcome in which `color` wins.
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWon,
            Color::Black => Outcome::BlackWon,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::InProgress => None,
            Outcome::WhiteWon => Some(Color::White),
            Outcome::BlackWon => Some(Color::Black),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            None => write!(f, "in progress"),
            Some(color) => write!(f, "{color} won"),
        }
    }
}

/// What an applied move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Outcome after the move; terminal if this move won the game
    pub outcome: Outcome,
}

/// A game in progress (or finished).
///
/// Deserializing checks that the counts match the board and that the turn
/// number is at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "snapshot::GameSnapshot", into = "snapshot::GameSnapshot")
)]
pub struct GameState {
    board: Board,
    counts: PieceCounts,
    active_player: Color,
    turn_number: u32,
    outcome: Outcome,
}

impl GameState {
    /// A new game from the standard initial position, white to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            counts: PieceCounts::initial(),
            active_player: Color::White,
            turn_number: 1,
            outcome: Outcome::InProgress,
        }
    }

    /// A new game from an arbitrary position. The piece counts are taken
    /// from the board, so a kind that is already absent can never be
    /// captured down to zero.
    #[must_use]
    pub fn from_board(board: Board, active_player: Color) -> Self {
        GameState {
            counts: PieceCounts::from_board(&board),
            board,
            active_player,
            turn_number: 1,
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &PieceCounts {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn active_player(&self) -> Color {
        self.active_player
    }

    /// Starts at 1 and goes up after each of black's moves.
    #[inline]
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Destinations for the piece on `from`, regardless of whose turn it is.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Bitboard {
        self.board.legal_destinations(from)
    }

    /// Run every precondition of a move without applying it, returning the
    /// piece that would move.
    pub fn validate(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver {
                outcome: self.outcome,
            });
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color() != self.active_player {
            return Err(MoveError::WrongColor {
                square: from,
                color: piece.color(),
            });
        }
        if !self.board.legal_destinations(from).contains(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    /// Apply a move, or explain why it was rejected. A rejected move leaves
    /// the state exactly as it was.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveReport, MoveError> {
        let piece = self.validate(from, to).map_err(|e| {
            debug!("rejected {from}-{to}: {e}");
            e
        })?;

        let captured = self.board.relocate(from, to);
        if let Some(victim) = captured {
            let remaining = self.counts.decrement(victim.color(), victim.kind());
            info!("{piece} takes {victim} on {to}; {remaining} left");
            if remaining == 0 {
                self.outcome = Outcome::won_by(piece.color());
                info!(
                    "{} wins on turn {}: every {} captured",
                    piece.color(),
                    self.turn_number,
                    victim.kind()
                );
                return Ok(self.report(piece, from, to, captured));
            }
        } else {
            debug!("{piece} {from}-{to}");
        }

        self.advance_turn();
        Ok(self.report(piece, from, to, captured))
    }

    /// Apply a move; `true` if it was legal and applied.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like [`GameState::try_move`] with squares in notation such as `"e2"`.
    pub fn try_move_notation(&mut self, from: &str, to: &str) -> Result<MoveReport, MoveError> {
        let parsed: Result<(Square, Square), SquareError> =
            from.parse::<Square>().and_then(|f| Ok((f, to.parse::<Square>()?)));
        let (from, to) = parsed.map_err(|e| {
            debug!("rejected {from}-{to}: {e}");
            MoveError::from(e)
        })?;
        self.try_move(from, to)
    }

    /// Like [`GameState::attempt_move`] with squares in notation such as
    /// `"e2"`. Malformed notation is rejected like any illegal move.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.try_move_notation(from, to).is_ok()
    }

    fn advance_turn(&mut self) {
        if self.active_player == Color::Black {
            self.turn_number += 1;
        }
        self.active_player = self.active_player.opponent();
    }

    fn report(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    ) -> MoveReport {
        MoveReport {
            piece,
            from,
            to,
            captured,
            outcome: self.outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
