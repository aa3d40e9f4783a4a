use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A discrete user intent, applied between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn { x: u32, y: u32 },
    ZoomOut { x: u32, y: u32 },
    IncreaseIterations,
    DecreaseIterations,
    IncreaseResolution,
    DecreaseResolution,
    ResetView,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("command '{command}' needs a pivot pixel like '{command}:400,300'")]
    MissingPivot { command: String },
    #[error("invalid pivot '{pivot}' for command '{command}'")]
    InvalidPivot { command: String, pivot: String },
    #[error("command '{0}' does not take arguments")]
    UnexpectedArgument(String),
}

fn parse_pivot(command: &str, pivot: &str) -> Result<(u32, u32), ParseCommandError> {
    let invalid = || ParseCommandError::InvalidPivot {
        command: command.to_string(),
        pivot: pivot.to_string(),
    };

    let (x, y) = pivot.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;

    Ok((x, y))
}

impl FromStr for NavCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name.trim(), Some(argument)),
            None => (s, None),
        };

        let command = match (name, argument) {
            ("zoom-in", Some(pivot)) => {
                let (x, y) = parse_pivot(name, pivot)?;
                Self::ZoomIn { x, y }
            }
            ("zoom-out", Some(pivot)) => {
                let (x, y) = parse_pivot(name, pivot)?;
                Self::ZoomOut { x, y }
            }
            ("zoom-in" | "zoom-out", None) => {
                return Err(ParseCommandError::MissingPivot {
                    command: name.to_string(),
                });
            }
            (_, Some(_)) => return Err(ParseCommandError::UnexpectedArgument(name.to_string())),
            ("pan-left", None) => Self::PanLeft,
            ("pan-right", None) => Self::PanRight,
            ("pan-up", None) => Self::PanUp,
            ("pan-down", None) => Self::PanDown,
            ("more-iterations", None) => Self::IncreaseIterations,
            ("fewer-iterations", None) => Self::DecreaseIterations,
            ("increase-resolution", None) => Self::IncreaseResolution,
            ("decrease-resolution", None) => Self::DecreaseResolution,
            ("reset", None) => Self::ResetView,
            ("quit", None) => Self::Quit,
            (other, None) => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

impl fmt::Display for NavCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PanLeft => f.write_str("pan-left"),
            Self::PanRight => f.write_str("pan-right"),
            Self::PanUp => f.write_str("pan-up"),
            Self::PanDown => f.write_str("pan-down"),
            Self::ZoomIn { x, y } => write!(f, "zoom-in:{x},{y}"),
            Self::ZoomOut { x, y } => write!(f, "zoom-out:{x},{y}"),
            Self::IncreaseIterations => f.write_str("more-iterations"),
            Self::DecreaseIterations => f.write_str("fewer-iterations"),
            Self::IncreaseResolution => f.write_str("increase-resolution"),
            Self::DecreaseResolution => f.write_str("decrease-resolution"),
            Self::ResetView => f.write_str("reset"),
            Self::Quit => f.write_str("quit"),
        }
    }
}
