//! Log severity levels ordered from least to most severe.

use crate::channel::Channel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a single log event.
///
/// Ordered from least severe (`Trace`) to most severe (`Critical`), matching
/// the derived `PartialOrd`/`Ord` implementation based on declaration order.
/// The discriminants are stable (`repr(u8)`) so a severity can be stored in
/// an atomic cell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained trace output.
    Trace = 0,
    /// Debug information useful during development.
    Debug = 1,
    /// General informational messages.
    Info = 2,
    /// A potential issue that deserves attention.
    Warning = 3,
    /// A failure of the current operation.
    Error = 4,
    /// A failure the process cannot recover from.
    Critical = 5,
}

impl Severity {
    /// Returns the output channel events of this severity are dispatched to.
    ///
    /// The mapping is fixed: `Trace`, `Debug`, and `Info` go to the info
    /// channel, `Warning` to the warning channel, `Error` and `Critical` to
    /// the error channel.
    pub fn channel(self) -> Channel {
        match self {
            Severity::Trace | Severity::Debug | Severity::Info => Channel::Info,
            Severity::Warning => Channel::Warning,
            Severity::Error | Severity::Critical => Channel::Error,
        }
    }

    /// Reconstructs a severity from its `repr(u8)` discriminant.
    ///
    /// Values above the `Critical` discriminant clamp to `Critical`.
    pub fn from_repr(value: u8) -> Severity {
        match value {
            0 => Severity::Trace,
            1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warning,
            4 => Severity::Error,
            _ => Severity::Critical,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Trace => write!(f, "trace"),
            Severity::Debug => write!(f, "debug"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Error type for parsing severity names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{input}'")]
pub struct ParseSeverityError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses the lowercase display names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}
