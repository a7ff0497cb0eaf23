use chrono::Datelike;

use crate::model::group::TaskGroup;
use crate::model::task::Task;

/// Serialize groups to task-file text, in the order given. A singleton
/// group is a bare task line (its name is not persisted); two or more
/// tasks become a braced block. Sorting is the caller's business (see
/// [`crate::ops::sort`]); this function never reorders. No trailing
/// newline.
pub fn serialize_groups(groups: &[TaskGroup]) -> String {
    let mut lines = Vec::new();

    for group in groups {
        if group.tasks.len() >= 2 {
            lines.push(format!("{}{{", group.name));
            for task in &group.tasks {
                lines.push(task_line(task));
            }
            lines.push("}".to_string());
        } else if let Some(task) = group.tasks.first() {
            lines.push(task_line(task));
        }
        // a zero-task group writes nothing
    }

    lines.join("\n")
}

/// One task line in the on-disk format: `yyyy/mm/dd, name` with month and
/// day zero-padded. Distinct from the display codec's unpadded
/// [`crate::parse::date_codec::format_display_date`]; the file format
/// stays fixed-width-friendly.
pub fn task_line(task: &Task) -> String {
    let due = task.due_date();
    format!(
        "{}/{}/{}, {}",
        due.year(),
        two_digit(due.month()),
        two_digit(due.day()),
        task.name()
    )
}

/// Always at least 2 digits: anything below 10 gets a leading 0. Values
/// with more digits pass through unchanged.
fn two_digit(value: u32) -> String {
    if value < 10 {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}
