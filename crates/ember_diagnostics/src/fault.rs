//! The failure payload attached to a log event.

use serde::{Deserialize, Serialize};

/// A failure being reported through the sink, with an optional chained cause.
///
/// A `Fault` is the payload of a log event, not an error this crate raises.
/// It mirrors the shape of an exception: a fully qualified type name, a
/// message, the raw stack trace text, and an optional inner fault. Any of
/// the textual fields may be blank; blank fields are skipped during
/// rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fault {
    /// Fully qualified type name of the failure.
    pub type_name: String,
    /// Human-readable failure message.
    pub message: String,
    /// Raw backtrace text.
    #[serde(default)]
    pub stack_trace: String,
    /// The fault that caused this one, if any.
    #[serde(default)]
    pub cause: Option<Box<Fault>>,
}

impl Fault {
    /// Creates a fault with the given type name and message, no stack trace,
    /// and no cause.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: String::new(),
            cause: None,
        }
    }

    /// Sets the raw stack trace text.
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = stack_trace.into();
        self
    }

    /// Sets the chained cause.
    pub fn with_cause(mut self, cause: Fault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Builds a fault chain from a standard error by walking its `source()`
    /// links.
    ///
    /// The outermost fault carries the concrete type name of `error`. Rust
    /// erases the concrete type of chained sources, so those links are
    /// labelled `error`. No link carries a stack trace.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut messages = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }

        let mut chain = None;
        for message in messages.into_iter().rev() {
            let mut fault = Fault::new("error", message);
            fault.cause = chain;
            chain = Some(Box::new(fault));
        }

        let mut root = Fault::new(std::any::type_name::<E>(), error.to_string());
        root.cause = chain;
        root
    }

    /// Iterates the fault chain from this fault to the innermost cause.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }
}

/// Iterator over a fault chain, outer to innermost.
///
/// Created by [`Fault::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a Fault>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Fault;

    fn next(&mut self) -> Option<&'a Fault> {
        let current = self.next?;
        self.next = current.cause.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let fault = Fault::new("X.Y", "oops")
            .with_stack_trace("at foo()")
            .with_cause(Fault::new("X.Z", "root cause"));
        assert_eq!(fault.type_name, "X.Y");
        assert_eq!(fault.message, "oops");
        assert_eq!(fault.stack_trace, "at foo()");
        assert_eq!(fault.cause.as_ref().unwrap().message, "root cause");
    }

    #[test]
    fn chain_walks_outer_to_innermost() {
        let fault = Fault::new("A", "first")
            .with_cause(Fault::new("B", "second").with_cause(Fault::new("C", "third")));
        let messages: Vec<&str> = fault.chain().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn chain_of_one() {
        let fault = Fault::new("A", "only");
        assert_eq!(fault.chain().count(), 1);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("outer failed")]
    struct Outer {
        #[source]
        inner: Inner,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("inner failed")]
    struct Inner;

    #[test]
    fn from_error_walks_sources() {
        let fault = Fault::from_error(&Outer { inner: Inner });
        let messages: Vec<&str> = fault.chain().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, ["outer failed", "inner failed"]);
        assert!(fault.type_name.ends_with("Outer"));
        assert_eq!(fault.cause.as_ref().unwrap().type_name, "error");
        assert!(fault.stack_trace.is_empty());
    }

    #[test]
    fn deserialize_defaults_optional_fields() {
        let fault: Fault =
            serde_json::from_str(r#"{"type_name":"X.Y","message":"oops"}"#).unwrap();
        assert_eq!(fault.type_name, "X.Y");
        assert!(fault.stack_trace.is_empty());
        assert!(fault.cause.is_none());
    }
}
