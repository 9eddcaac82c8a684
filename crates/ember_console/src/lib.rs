//! Console sink adapter routing log events into a host console surface.
//!
//! [`ConsoleSink`] receives a log event (severity, lazily produced message,
//! optional [`Fault`]), drops it when it does not pass the shared
//! [`Threshold`], and otherwise renders one text block and dispatches it to
//! the [`Console`] channel chosen by severity. [`EmberLogger`] plugs the
//! sink into the `log` facade so the standard logging macros can drive it.

#![warn(missing_docs)]

pub mod bridge;
pub mod console;
pub mod sink;
pub mod threshold;

pub use bridge::EmberLogger;
pub use console::{Console, RecordingConsole, StdConsole};
pub use sink::ConsoleSink;
pub use threshold::Threshold;

pub use ember_diagnostics::{render_block, Channel, Fault, ParseSeverityError, Severity};
