//! Log event data model and block rendering for the Ember console sink.
//!
//! This crate provides the ordered [`Severity`] levels, the output
//! [`Channel`] a severity dispatches to, the [`Fault`] failure payload with
//! its chained causes, and [`render_block`] which assembles the final text
//! for one log event.

#![warn(missing_docs)]

pub mod channel;
pub mod fault;
pub mod render;
pub mod severity;

pub use channel::Channel;
pub use fault::Fault;
pub use render::render_block;
pub use severity::{ParseSeverityError, Severity};
