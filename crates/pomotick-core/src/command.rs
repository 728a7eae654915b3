//! Text commands a host forwards to the controller.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Start when idle, pause when running.
    ToggleRun,
    Reset,
    /// Deliver one tick by hand.
    Tick,
    Status,
    Log,
    Quit,
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "toggle" | "start" | "pause" => Ok(Command::ToggleRun),
            "r" | "reset" => Ok(Command::Reset),
            "tick" => Ok(Command::Tick),
            "s" | "status" => Ok(Command::Status),
            "l" | "log" => Ok(Command::Log),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CoreError::UnknownCommand(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("t".parse::<Command>().unwrap(), Command::ToggleRun);
        assert_eq!("  Pause\n".parse::<Command>().unwrap(), Command::ToggleRun);
        assert_eq!("RESET".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("tick".parse::<Command>().unwrap(), Command::Tick);
        assert_eq!("s".parse::<Command>().unwrap(), Command::Status);
        assert_eq!("log".parse::<Command>().unwrap(), Command::Log);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_unknown_input() {
        let err = "launch".parse::<Command>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCommand(ref s) if s == "launch"));
        assert!(err.to_string().contains("launch"));
    }
}
