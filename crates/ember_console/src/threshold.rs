//! Process-wide minimum severity shared between sinks.

use ember_diagnostics::Severity;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A cheaply clonable handle to the process-wide minimum severity.
///
/// Every clone observes the same underlying value, so a host can hand one
/// handle to its sinks and keep another to adjust filtering at runtime.
/// Reads and writes are single relaxed atomic operations on the severity
/// discriminant; callers needing ordering with other state must synchronize
/// at a higher layer.
#[derive(Clone, Debug)]
pub struct Threshold {
    min: Arc<AtomicU8>,
}

impl Threshold {
    /// Creates a threshold starting at the given minimum severity.
    pub fn new(min: Severity) -> Self {
        Self {
            min: Arc::new(AtomicU8::new(min as u8)),
        }
    }

    /// Returns the current minimum severity.
    pub fn get(&self) -> Severity {
        Severity::from_repr(self.min.load(Ordering::Relaxed))
    }

    /// Sets the minimum severity, effective for subsequent log calls.
    pub fn set(&self, min: Severity) {
        self.min.store(min as u8, Ordering::Relaxed);
    }

    /// Returns `true` if events at `severity` pass the threshold.
    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.get()
    }
}

impl Default for Threshold {
    /// Defaults to [`Severity::Info`].
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    #[test]
    fn allows_is_at_or_above_minimum() {
        let threshold = Threshold::new(Severity::Warning);
        for severity in ALL {
            assert_eq!(threshold.allows(severity), severity >= Severity::Warning);
        }
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Threshold::default().get(), Severity::Info);
    }

    #[test]
    fn set_takes_effect_immediately() {
        let threshold = Threshold::new(Severity::Info);
        assert!(!threshold.allows(Severity::Debug));
        threshold.set(Severity::Trace);
        assert!(threshold.allows(Severity::Debug));
    }

    #[test]
    fn clones_share_state() {
        let threshold = Threshold::new(Severity::Info);
        let handle = threshold.clone();
        handle.set(Severity::Error);
        assert_eq!(threshold.get(), Severity::Error);
    }

    #[test]
    fn set_is_visible_across_threads() {
        use std::thread;

        let threshold = Threshold::new(Severity::Trace);
        let handle = threshold.clone();
        thread::spawn(move || handle.set(Severity::Critical))
            .join()
            .unwrap();
        assert_eq!(threshold.get(), Severity::Critical);
    }
}
