use chrono::NaiveDate;

use crate::model::group::TaskGroup;
use crate::model::task::Task;

use super::date_codec::parse_display_date;
use super::diagnostics::Diagnostic;

/// The not-yet-validated textual split of one task line. Malformed
/// due-date text rides through line splitting untouched; it is only
/// checked one stage later, at conversion to [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTask {
    pub due_date: String,
    pub name: String,
}

/// A group of raw task lines as found in the file, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTaskGroup {
    pub name: String,
    pub tasks: Vec<RawTask>,
}

/// Stage A: split raw file text on `\n`, discarding the separators and
/// every empty line. Consecutive newlines collapse; a trailing newline
/// produces no extra line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stage B: run the grouping state machine over the lines.
///
/// Each line is one of three forms, tried in this order: a group-open line
/// (last byte `{`, the rest is the group name, possibly empty), a
/// group-close line (exactly `}`), or a task line. A `}` is accepted
/// whether or not a group is open; it just clears the fetching state. A
/// group-open inside an open group reports [`Diagnostic::NestedGroup`] and
/// is otherwise ignored, so nested content attaches to the outermost
/// still-open group. A group left open at end of input flushes anyway. A
/// flush never emits a zero-task group.
pub fn parse_raw_groups(
    lines: &[String],
    mut on_diagnostic: impl FnMut(Diagnostic),
) -> Vec<RawTaskGroup> {
    let mut groups = Vec::new();
    let mut open: Option<RawTaskGroup> = None;

    for line in lines {
        if let Some(name) = line.strip_suffix('{') {
            match &open {
                Some(outer) => on_diagnostic(Diagnostic::NestedGroup {
                    outer: outer.name.clone(),
                    inner: name.to_string(),
                }),
                None => {
                    open = Some(RawTaskGroup {
                        name: name.to_string(),
                        tasks: Vec::new(),
                    });
                }
            }
        } else if line == "}" {
            if let Some(group) = open.take()
                && !group.tasks.is_empty()
            {
                groups.push(group);
            }
        } else {
            let task = split_task_line(line);
            match &mut open {
                Some(group) => group.tasks.push(task),
                None => groups.push(RawTaskGroup {
                    name: String::new(),
                    tasks: vec![task],
                }),
            }
        }
    }

    // an unterminated group silently absorbs end of input
    if let Some(group) = open
        && !group.tasks.is_empty()
    {
        groups.push(group);
    }

    groups
}

/// Split one task line at the first comma. The due-date text is everything
/// before it; the name starts two bytes past it, skipping the comma and
/// the conventional space unconditionally. A line whose comma is followed
/// by a non-space therefore loses the first name character, and a line
/// with no comma is all due-date text with an empty name. Both kept as-is.
fn split_task_line(line: &str) -> RawTask {
    match line.find(',') {
        Some(comma) => RawTask {
            due_date: line[..comma].to_string(),
            name: line.get(comma + 2..).unwrap_or_default().to_string(),
        },
        None => RawTask {
            due_date: line.to_string(),
            name: String::new(),
        },
    }
}

/// Stage C: convert raw groups to [`TaskGroup`]s, validating each due date
/// through the codec. A rejected date reports
/// [`Diagnostic::InvalidDueDate`] and drops that task only; a group left
/// with no valid task is dropped entirely, so every returned group has at
/// least one task. `reference` is the "today" every task's remaining days
/// are computed against.
pub fn validate_groups(
    raw_groups: Vec<RawTaskGroup>,
    reference: NaiveDate,
    mut on_diagnostic: impl FnMut(Diagnostic),
) -> Vec<TaskGroup> {
    let mut groups = Vec::new();

    for raw_group in raw_groups {
        let mut tasks = Vec::new();
        for raw in raw_group.tasks {
            match parse_display_date(&raw.due_date) {
                Ok(due_date) => tasks.push(Task::with_reference(due_date, raw.name, reference)),
                Err(reason) => on_diagnostic(Diagnostic::InvalidDueDate {
                    name: raw.name,
                    date_text: raw.due_date,
                    reason,
                }),
            }
        }
        if !tasks.is_empty() {
            groups.push(TaskGroup {
                name: raw_group.name,
                tasks,
            });
        }
    }

    groups
}
