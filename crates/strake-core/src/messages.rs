//! Fixed message catalog for strake rules.
//!
//! Keys are stable identifiers carried on violations; the text is what a
//! reporting sink renders next to the line number. Rules never interpolate
//! parameters into these messages.

/// Message key for the one-statement-per-line rule.
pub const MSG_MULTIPLE_STATEMENTS: &str = "multiple.statements.line";

/// Resolve a message key to its rendered text.
pub fn message_text(key: &str) -> Option<&'static str> {
    match key {
        MSG_MULTIPLE_STATEMENTS => Some("Only one statement per line allowed."),
        _ => None,
    }
}
