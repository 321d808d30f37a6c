//! Line-oriented command parsing for the interactive driver.

use std::fmt;

use crate::board::{Square, SquareError};

/// Commands understood by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move, squares still in notation (`e2 e4` or `e2e4`)
    Move { from: String, to: String },
    /// List the destinations of the piece on a square
    Moves(Square),
    /// Print the board
    Board,
    /// Print turn, side on move and outcome
    Status,
    /// Restart from the initial position
    New,
    /// Change a driver option, e.g. `set board on`
    Set { name: String, value: bool },
    Help,
    Quit,
}

/// Error type for command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Neither a keyword nor a move
    UnknownCommand { input: String },
    /// A keyword was given without its argument
    MissingArgument { command: &'static str },
    /// `set` was given a value other than on/off
    InvalidSwitch { value: String },
    /// `set` named an option that does not exist
    UnknownOption { name: String },
    /// A square argument could not be parsed
    InvalidSquare(SquareError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand { input } => {
                write!(f, "Unknown command '{input}' (try 'help')")
            }
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' needs an argument")
            }
            CommandError::InvalidSwitch { value } => {
                write!(f, "Expected on or off, got '{value}'")
            }
            CommandError::UnknownOption { name } => write!(f, "No option named '{name}'"),
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

/// Parse `on`/`off` (also `true`/`false`, `1`/`0`).
pub fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(CommandError::InvalidSwitch {
            value: value.to_string(),
        }),
    }
}

/// Split a move given as one token (`e2e4`) or two (`e2 e4`). Only the
/// shape is checked here; the squares are parsed when the move is tried.
fn split_move(parts: &[&str]) -> Option<(String, String)> {
    match parts {
        [from, to] if from.chars().count() == 2 && to.chars().count() == 2 => {
            Some(((*from).to_string(), (*to).to_string()))
        }
        [token] if token.chars().count() == 4 => {
            let mid = token.char_indices().nth(2)?.0;
            Some((token[..mid].to_string(), token[mid..].to_string()))
        }
        _ => None,
    }
}

/// Parse one line of input. Blank lines give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&keyword) = parts.first() else {
        return Ok(None);
    };

    let cmd = match keyword {
        "board" => Command::Board,
        "status" => Command::Status,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "moves" => {
            let sq = parts
                .get(1)
                .ok_or(CommandError::MissingArgument { command: "moves" })?;
            Command::Moves(sq.parse()?)
        }
        "set" => {
            let (Some(name), Some(value)) = (parts.get(1), parts.get(2)) else {
                return Err(CommandError::MissingArgument { command: "set" });
            };
            Command::Set {
                name: name.to_ascii_lowercase(),
                value: parse_switch(value)?,
            }
        }
        _ => {
            let (from, to) = split_move(&parts).ok_or_else(|| CommandError::UnknownCommand {
                input: line.trim().to_string(),
            })?;
            Command::Move { from, to }
        }
    };
    Ok(Some(cmd))
}
