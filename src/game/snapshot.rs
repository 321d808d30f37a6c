//! Checked serialized form of a game.
//!
//! A loaded game must satisfy the same invariants as one that was played:
//! the counts agree with the board and turns start at 1.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceKind};

use super::{GameState, Outcome, PieceCounts};

/// Wire shape of a [`GameState`].
#[derive(Serialize, Deserialize)]
pub struct GameSnapshot {
    board: Board,
    counts: PieceCounts,
    active_player: Color,
    turn_number: u32,
    outcome: Outcome,
}

/// Why a serialized game was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A recorded count differs from the pieces actually on the board
    CountMismatch {
        color: Color,
        kind: PieceKind,
        recorded: u8,
        on_board: u8,
    },
    /// Turns are numbered from 1
    ZeroTurn,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::CountMismatch {
                color,
                kind,
                recorded,
                on_board,
            } => write!(
                f,
                "{color} {kind} count is {recorded} but the board has {on_board}"
            ),
            SnapshotError::ZeroTurn => write!(f, "Turn number must be at least 1"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<GameState> for GameSnapshot {
    fn from(game: GameState) -> Self {
        GameSnapshot {
            board: game.board,
            counts: game.counts,
            active_player: game.active_player,
            turn_number: game.turn_number,
            outcome: game.outcome,
        }
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        if snapshot.turn_number == 0 {
            return Err(SnapshotError::ZeroTurn);
        }
        let census = PieceCounts::from_board(&snapshot.board);
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let recorded = snapshot.counts.get(color, kind);
                let on_board = census.get(color, kind);
                if recorded != on_board {
                    debug!("refusing snapshot: {color} {kind} {recorded} vs {on_board}");
                    return Err(SnapshotError::CountMismatch {
                        color,
                        kind,
                        recorded,
                        on_board,
                    });
                }
            }
        }

        Ok(GameState {
            board: snapshot.board,
            counts: snapshot.counts,
            active_player: snapshot.active_player,
            turn_number: snapshot.turn_number,
            outcome: snapshot.outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_game_passes_checks() {
        let mut game = GameState::new();
        assert!(game.make_move("e2", "e4"));
        assert!(game.make_move("d7", "d5"));
        assert!(game.make_move("e4", "d5"));

        let restored = GameState::try_from(GameSnapshot::from(game.clone()));
        assert_eq!(restored, Ok(game));
    }

    #[test]
    fn test_stale_counts_are_refused() {
        let mut snapshot = GameSnapshot::from(GameState::new());
        snapshot.board.remove_piece("a1".parse().unwrap());

        assert_eq!(
            GameState::try_from(snapshot),
            Err(SnapshotError::CountMismatch {
                color: Color::White,
                kind: PieceKind::Rook,
                recorded: 2,
                on_board: 1,
            })
        );
    }

    #[test]
    fn test_zero_turn_is_refused() {
        let mut snapshot = GameSnapshot::from(GameState::new());
        snapshot.turn_number = 0;
        assert_eq!(GameState::try_from(snapshot), Err(SnapshotError::ZeroTurn));
    }

    #[test]
    fn test_error_messages() {
        let err = SnapshotError::CountMismatch {
            color: Color::Black,
            kind: PieceKind::Queen,
            recorded: 1,
            on_board: 0,
        };
        assert_eq!(err.to_string(), "Black queen count is 1 but the board has 0");
        assert!(SnapshotError::ZeroTurn.to_string().contains("at least 1"));
    }
}
