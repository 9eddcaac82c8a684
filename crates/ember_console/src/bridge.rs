//! Bridge from the `log` facade into a console sink.

use crate::sink::ConsoleSink;
use ember_diagnostics::Severity;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Adapter that lets the standard `log` macros drive a [`ConsoleSink`].
///
/// The facade's five levels map onto the sink's severity scale one-to-one;
/// `Critical` has no facade counterpart and is reachable only through the
/// sink directly.
pub struct EmberLogger {
    sink: ConsoleSink,
}

impl EmberLogger {
    /// Wraps a sink for use as a `log` backend.
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }

    /// Installs this logger as the process-wide `log` backend.
    ///
    /// Fails if another logger is already installed. The facade's max level
    /// is opened fully; filtering stays with the shared threshold so the
    /// host can adjust it at runtime.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

/// Maps a facade level onto the sink's severity scale.
fn severity_of(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug => Severity::Debug,
        Level::Trace => Severity::Trace,
    }
}

impl Log for EmberLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.sink.enabled(severity_of(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let severity = severity_of(record.level());
        self.sink.log(severity, Some(|| record.args().to_string()), None);
    }

    fn flush(&self) {}
}
