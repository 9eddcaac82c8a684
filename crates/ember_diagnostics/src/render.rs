//! Rendering of a log event into its final text block.

use crate::fault::Fault;

/// Closing delimiter line under a stack trace section.
const TRACE_FOOTER: &str =
    "******************************************************************";

/// Renders the final text block for one log event.
///
/// The block starts with the base message. Each fault in the chain, outer
/// to innermost, then contributes up to two sections, each preceded by a
/// blank line:
///
/// - `<type_name>: <message>` when the fault message is non-blank;
/// - a delimited stack trace section (header line, blank line, the raw
///   trace text, blank line, closing delimiter) when the trace text is
///   non-blank.
///
/// A fault with a blank message and a blank trace contributes nothing. A
/// call without a fault renders exactly the message, with no trailing
/// newline.
pub fn render_block(message: &str, fault: Option<&Fault>) -> String {
    let mut out = String::from(message);
    let Some(fault) = fault else {
        return out;
    };

    for link in fault.chain() {
        if !is_blank(&link.message) {
            out.push_str("\n\n");
            out.push_str(&link.type_name);
            out.push_str(": ");
            out.push_str(&link.message);
        }
        if !is_blank(&link.stack_trace) {
            out.push_str("\n\n");
            out.push_str("********** Stack Trace: ");
            out.push_str(&link.type_name);
            out.push_str(" **********");
            out.push_str("\n\n");
            out.push_str(&link.stack_trace);
            out.push_str("\n\n");
            out.push_str(TRACE_FOOTER);
        }
    }
    out
}

/// Returns `true` for empty or whitespace-only text.
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
