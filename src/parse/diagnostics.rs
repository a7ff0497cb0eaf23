use std::fmt;

use super::date_codec::DateParseError;

/// A non-fatal anomaly found while reading the task file. These never
/// abort a load; they are handed to an injectable callback and the parse
/// continues with the best-effort result. Fatal I/O failures take the
/// error path instead (see [`crate::io::task_file::TaskFileError`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A group-open line appeared while another group was still open. Only
    /// one nesting level exists; the inner line is ignored and its tasks
    /// accumulate under the outer group.
    NestedGroup { outer: String, inner: String },
    /// A task line whose due-date text the codec rejected. The task is
    /// dropped; the rest of its group survives.
    InvalidDueDate {
        name: String,
        date_text: String,
        reason: DateParseError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NestedGroup { outer, inner } => write!(
                f,
                "group \"{}\" defined inside group \"{}\": nested groups are not supported, its tasks stay in \"{}\"",
                inner, outer, outer
            ),
            Diagnostic::InvalidDueDate {
                name,
                date_text,
                reason,
            } => write!(
                f,
                "\"{}\" not loaded due to invalid due date \"{}\": {}",
                name, date_text, reason
            ),
        }
    }
}

/// Default reporter: a stderr warning. UI layers usually substitute an
/// alert popup.
pub fn report_to_stderr(diagnostic: Diagnostic) {
    eprintln!("warning: {}", diagnostic);
}
