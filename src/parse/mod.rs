pub mod date_codec;
pub mod diagnostics;
pub mod task_parser;
pub mod task_serializer;

pub use date_codec::{DateParseError, format_display_date, parse_display_date};
pub use diagnostics::{Diagnostic, report_to_stderr};
pub use task_parser::{RawTask, RawTaskGroup, parse_raw_groups, split_lines, validate_groups};
pub use task_serializer::{serialize_groups, task_line};
