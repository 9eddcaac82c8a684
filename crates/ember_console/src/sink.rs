//! The diagnostic sink adapter: gate, render, dispatch.

use crate::console::{Console, StdConsole};
use crate::threshold::Threshold;
use ember_diagnostics::{render_block, Fault, Severity};
use std::sync::Arc;

/// Routes log events to a host console, gated by the shared threshold.
///
/// A sink is a stateless filter-and-format-and-forward pipeline: an enabled
/// event has its message produced, its fault chain rendered into one text
/// block, and the block dispatched to the console channel chosen by
/// severity. A suppressed event costs one atomic load; its message closure
/// never runs.
pub struct ConsoleSink {
    category: String,
    threshold: Threshold,
    console: Arc<dyn Console>,
}

impl ConsoleSink {
    /// Creates a sink writing to the given console.
    pub fn new(
        category: impl Into<String>,
        threshold: Threshold,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            category: category.into(),
            threshold,
            console,
        }
    }

    /// Creates a sink writing to the standard streams.
    pub fn stdio(category: impl Into<String>, threshold: Threshold) -> Self {
        Self::new(category, threshold, Arc::new(StdConsole))
    }

    /// The category this sink was created for.
    ///
    /// Informational only; never used for routing or rendering.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the shared threshold handle.
    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Returns `true` if events at `severity` would be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.allows(severity)
    }

    /// Logs one event.
    ///
    /// The message closure runs only when the event passes the threshold.
    /// An absent closure makes an enabled call a no-op, not an error. The
    /// rendered block goes to exactly one channel; the write is synchronous
    /// and fire-and-forget.
    pub fn log<F>(&self, severity: Severity, message: Option<F>, fault: Option<&Fault>)
    where
        F: FnOnce() -> String,
    {
        if !self.enabled(severity) {
            return;
        }
        let Some(message) = message else {
            return;
        };
        let block = render_block(&message(), fault);
        self.console.write(severity.channel(), &block);
    }
}
