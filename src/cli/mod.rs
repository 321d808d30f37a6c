//! Interactive text driver.
//!
//! Reads one command per line and answers on the output stream. Moves go
//! through [`GameState::try_move_notation`], so the driver never touches the
//! board directly.
//!
//! ```text
//! > e2e4
//! ok
//! > e4 e5
//! illegal: Piece on e4 belongs to White, who is not on move
//! > moves g8
//! g8: f6 h6
//! ```

pub mod command;
pub mod options;

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::game::{render, GameState, Outcome};

use command::{parse_command, Command};
pub use command::CommandError;
pub use options::CliOptions;

const HELP: &str = "\
commands:
  <from> <to> | <from><to>   move a piece, e.g. e2 e4 or e2e4
  moves <square>             list where the piece on <square> can go
  board                      print the board
  status                     turn, side on move and result
  new                        start a new game
  set board on|off           print the board after every move
  set verbose on|off         explain rejected moves
  help                       this text
  quit                       leave";

/// A game plus the driver options that shape its output.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    options: CliOptions,
}

impl Session {
    #[must_use]
    pub fn new(options: CliOptions) -> Self {
        Session {
            game: GameState::new(),
            options,
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &CliOptions {
        &self.options
    }

    /// Handle a single command. `Quit` is left to the caller.
    pub fn handle_command(&mut self, cmd: &Command) -> Option<String> {
        match cmd {
            Command::Move { from, to } => Some(self.handle_move(from, to)),
            Command::Moves(sq) => {
                let targets: Vec<String> = self
                    .game
                    .legal_destinations(*sq)
                    .iter()
                    .map(|t| t.to_string())
                    .collect();
                if targets.is_empty() {
                    Some(format!("{sq}: none"))
                } else {
                    Some(format!("{sq}: {}", targets.join(" ")))
                }
            }
            Command::Board => Some(render(&self.game)),
            Command::Status => Some(self.status()),
            Command::New => {
                self.game = GameState::new();
                info!("new game");
                self.options.show_board.then(|| render(&self.game))
            }
            Command::Set { name, value } => match self.options.apply_set(name, *value) {
                Ok(()) => Some(self.options.describe()),
                Err(e) => Some(format!("error: {e}")),
            },
            Command::Help => Some(HELP.to_string()),
            Command::Quit => None,
        }
    }

    /// Parse and handle one line. Returns `None` for blank lines and `quit`.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match parse_command(line) {
            Ok(Some(cmd)) => self.handle_command(&cmd),
            Ok(None) => None,
            Err(e) => Some(Self::parse_failure(line, &e)),
        }
    }

    fn parse_failure(line: &str, e: &CommandError) -> String {
        debug!("bad command {line:?}: {e}");
        format!("error: {e}")
    }

    fn handle_move(&mut self, from: &str, to: &str) -> String {
        let report = match self.game.try_move_notation(from, to) {
            Ok(report) => report,
            Err(e) if self.options.verbose_errors => return format!("illegal: {e}"),
            Err(_) => return "illegal".to_string(),
        };

        let mut out = String::from("ok");
        if let Some(winner) = report.outcome.winner() {
            out.push_str(&format!("\nresult: {winner} wins"));
        }
        if self.options.show_board {
            out.push('\n');
            out.push_str(render(&self.game).trim_end());
        }
        out
    }

    fn status(&self) -> String {
        match self.game.outcome() {
            Outcome::InProgress => format!(
                "turn {}, {} to move",
                self.game.turn_number(),
                self.game.active_player()
            ),
            outcome => format!("turn {}, {outcome}", self.game.turn_number()),
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let response = match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(cmd)) => self.handle_command(&cmd),
                Ok(None) => None,
                Err(e) => Some(Self::parse_failure(&line, &e)),
            };
            if let Some(resp) = response {
                for line in resp.lines() {
                    writeln!(output, "{line}")?;
                }
                output.flush()?;
            }
        }
        Ok(())
    }
}

/// Run the driver on stdin/stdout with options from the environment.
pub fn run_cli() -> io::Result<()> {
    let options = CliOptions::from_env();
    info!("starting session with {options:?}");
    let mut session = Session::new(options);
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(CliOptions::default())
    }

    #[test]
    fn test_move_ok_and_illegal() {
        let mut s = session();
        assert_eq!(s.handle_line("e2e4").as_deref(), Some("ok"));
        let resp = s.handle_line("e4 e5").unwrap();
        assert!(resp.starts_with("illegal: "), "{resp}");
        assert!(resp.contains("White"));
    }

    #[test]
    fn test_terse_rejection() {
        let mut s = Session::new(CliOptions {
            show_board: false,
            verbose_errors: false,
        });
        assert_eq!(s.handle_line("b1 d2").as_deref(), Some("illegal"));
    }

    #[test]
    fn test_moves_listing() {
        let mut s = session();
        assert_eq!(s.handle_line("moves g1").as_deref(), Some("g1: f3 h3"));
        assert_eq!(s.handle_line("moves e4").as_deref(), Some("e4: none"));
        assert_eq!(s.handle_line("moves a1").as_deref(), Some("a1: none"));
    }

    #[test]
    fn test_status_and_new() {
        let mut s = session();
        assert_eq!(s.handle_line("status").as_deref(), Some("turn 1, White to move"));
        s.handle_line("e2e4");
        s.handle_line("e7e5");
        assert_eq!(s.handle_line("status").as_deref(), Some("turn 2, White to move"));
        assert_eq!(s.handle_line("new"), None);
        assert_eq!(s.game(), &GameState::new());
    }

    #[test]
    fn test_set_board_renders_after_moves() {
        let mut s = session();
        assert_eq!(s.handle_line("set board on").as_deref(), Some("board on\nverbose on"));
        let resp = s.handle_line("e2 e4").unwrap();
        assert!(resp.starts_with("ok\nTurn 1 Black Phase\n"), "{resp}");
    }

    #[test]
    fn test_set_unknown_option() {
        let mut s = session();
        let resp = s.handle_line("set colour on").unwrap();
        assert!(resp.starts_with("error: "));
        assert_eq!(s.options(), &CliOptions::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let mut s = session();
        assert!(s.handle_line("resign").unwrap().starts_with("error: Unknown command"));
        assert_eq!(s.handle_line(""), None);
    }

    #[test]
    fn test_run_stops_at_quit() {
        let mut s = session();
        let input = b"e2e4\n\nbogus\nquit\ne7e5\n";
        let mut out = Vec::new();
        s.run(&input[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ok");
        assert!(lines[1].starts_with("error: "));
        assert_eq!(lines.len(), 2);
        assert_eq!(s.game().active_player(), crate::board::Color::Black);
    }

    #[test]
    fn test_run_answers_each_line_once() {
        let mut s = session();
        let mut out = Vec::new();
        s.run(&b"e2e4
status
set board on
quit
"[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            ["ok", "turn 1, Black to move", "board on", "verbose on"]
        );
        assert_eq!(s.handle_line("quit"), None);
    }
}
