//! Output channels exposed by a host console.

use std::fmt;

/// One of the three output channels a rendered block is dispatched to.
///
/// Every log event lands on exactly one channel, chosen by its severity via
/// [`Severity::channel`](crate::Severity::channel).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Channel {
    /// Routine output (stdout on a standard console).
    Info,
    /// Warnings (stderr on a standard console).
    Warning,
    /// Errors (stderr on a standard console).
    Error,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Info => write!(f, "info"),
            Channel::Warning => write!(f, "warning"),
            Channel::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Channel::Info), "info");
        assert_eq!(format!("{}", Channel::Warning), "warning");
        assert_eq!(format!("{}", Channel::Error), "error");
    }
}
