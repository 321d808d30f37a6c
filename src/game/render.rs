//! Text rendering of a game.
//!
//! ```text
//! Turn 1 White Phase
//!    a   b   c   d   e   f   g   h
//! 8  bR  bKn bB  bQ  bK  bB  bKn bR  8
//! ...
//! ```

use std::fmt;

use crate::board::Square;

use super::{GameState, Outcome};

const FILE_LABELS: &str = "   a   b   c   d   e   f   g   h  ";
const EMPTY_CELL: &str = " -- ";

fn status_line(state: &GameState) -> String {
    let phase = match state.outcome() {
        Outcome::InProgress => format!("{} Phase", state.active_player()),
        Outcome::WhiteWon => "White Victory".to_string(),
        Outcome::BlackWon => "Black Victory".to_string(),
    };
    format!("Turn {} {phase}", state.turn_number())
}

/// Status header, then the board from rank 8 down to rank 1 with file and
/// rank labels on every side.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        writeln!(f, "{}", status_line(self))?;
        writeln!(f, "{FILE_LABELS}")?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match board.piece_at(Square(rank, file)) {
                    Some(piece) => write!(f, " {:<3}", piece.symbol())?,
                    None => f.write_str(EMPTY_CELL)?,
                }
            }
            writeln!(f, " {}", rank + 1)?;
        }
        writeln!(f, "{FILE_LABELS}")
    }
}

/// The text diagram of `state`; same as its `Display` output.
#[must_use]
pub fn render(state: &GameState) -> String {
    state.to_string()
}
