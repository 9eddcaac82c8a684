//! The host console surface the sink writes to.

use ember_diagnostics::Channel;
use std::io::Write;
use std::sync::Mutex;

/// The host output surface: three synchronous, fire-and-forget channels.
///
/// Implementations are assumed non-failing; the sink performs no retry or
/// buffering around a write. Thread safety of the underlying output device
/// is the implementation's concern.
pub trait Console: Send + Sync {
    /// Writes a rendered block to the info channel.
    fn write_info(&self, text: &str);

    /// Writes a rendered block to the warning channel.
    fn write_warning(&self, text: &str);

    /// Writes a rendered block to the error channel.
    fn write_error(&self, text: &str);

    /// Dispatches a rendered block to exactly one channel.
    fn write(&self, channel: Channel, text: &str) {
        match channel {
            Channel::Info => self.write_info(text),
            Channel::Warning => self.write_warning(text),
            Channel::Error => self.write_error(text),
        }
    }
}

/// A console over the standard streams.
///
/// Info goes to stdout, warnings and errors to stderr. Stream errors are
/// ignored.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_info(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
    }

    fn write_warning(&self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{text}");
    }

    fn write_error(&self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{text}");
    }
}

/// A console that records every dispatched block.
///
/// Useful in tests and in embedded hosts that capture output instead of
/// printing it.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    written: Mutex<Vec<(Channel, String)>>,
}

impl RecordingConsole {
    /// Creates an empty recording console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything written so far, in write order.
    pub fn written(&self) -> Vec<(Channel, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn write_info(&self, text: &str) {
        let mut written = self.written.lock().unwrap();
        written.push((Channel::Info, text.to_string()));
    }

    fn write_warning(&self, text: &str) {
        let mut written = self.written.lock().unwrap();
        written.push((Channel::Warning, text.to_string()));
    }

    fn write_error(&self, text: &str) {
        let mut written = self.written.lock().unwrap();
        written.push((Channel::Error, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_routes_to_one_channel() {
        let console = RecordingConsole::new();
        console.write(Channel::Info, "a");
        console.write(Channel::Warning, "b");
        console.write(Channel::Error, "c");
        assert_eq!(
            console.written(),
            vec![
                (Channel::Info, "a".to_string()),
                (Channel::Warning, "b".to_string()),
                (Channel::Error, "c".to_string()),
            ]
        );
    }

    #[test]
    fn empty_console_records_nothing() {
        let console = RecordingConsole::new();
        assert!(console.written().is_empty());
    }
}
