use log::warn;

use super::command::{parse_switch, CommandError};

/// Environment variable overriding [`CliOptions::show_board`]
pub const SHOW_BOARD_VAR: &str = "VARCHESS_SHOW_BOARD";
/// Environment variable overriding [`CliOptions::verbose_errors`]
pub const VERBOSE_VAR: &str = "VARCHESS_VERBOSE";

/// Driver settings, changeable at runtime with `set <name> on|off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    /// Print the board after every applied move
    pub show_board: bool,
    /// Say why a move was rejected instead of a bare `illegal`
    pub verbose_errors: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            show_board: false,
            verbose_errors: true,
        }
    }
}

impl CliOptions {
    /// Defaults overridden by `VARCHESS_SHOW_BOARD` and `VARCHESS_VERBOSE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`CliOptions::from_env`] with a custom variable source.
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = CliOptions::default();
        for (var, name) in [(SHOW_BOARD_VAR, "board"), (VERBOSE_VAR, "verbose")] {
            let Some(raw) = lookup(var) else { continue };
            match parse_switch(&raw).and_then(|value| options.apply_set(name, value)) {
                Ok(()) => {}
                Err(e) => warn!("ignoring {var}: {e}"),
            }
        }
        options
    }

    pub fn apply_set(&mut self, name: &str, value: bool) -> Result<(), CommandError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "board" => self.show_board = value,
            "verbose" => self.verbose_errors = value,
            _ => {
                return Err(CommandError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// One line per option, as `name on|off`.
    #[must_use]
    pub fn describe(&self) -> String {
        let switch = |on: bool| if on { "on" } else { "off" };
        format!(
            "board {}\nverbose {}",
            switch(self.show_board),
            switch(self.verbose_errors)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(CliOptions::from_lookup(lookup(&[])), CliOptions::default());
    }

    #[test]
    fn test_env_overrides() {
        let options =
            CliOptions::from_lookup(lookup(&[(SHOW_BOARD_VAR, "1"), (VERBOSE_VAR, "off")]));
        assert!(options.show_board);
        assert!(!options.verbose_errors);
    }

    #[test]
    fn test_bad_env_value_keeps_default() {
        let options = CliOptions::from_lookup(lookup(&[(SHOW_BOARD_VAR, "sometimes")]));
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn test_apply_set() {
        let mut options = CliOptions::default();
        options.apply_set("Board", true).unwrap();
        assert!(options.show_board);
        assert_eq!(
            options.apply_set("colour", true),
            Err(CommandError::UnknownOption {
                name: "colour".to_string()
            })
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(CliOptions::default().describe(), "board off\nverbose on");
    }
}
