use chrono::NaiveDate;
use serde::Serialize;

use super::task::Task;

/// A named or anonymous ordered cluster of tasks, the unit of on-disk
/// persistence. A singleton carries the empty group name by convention and
/// serializes as a bare task line; two or more tasks serialize as a braced
/// block. Zero-task groups are never flushed by the parser nor written by
/// the serializer, so a persisted group always has at least one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGroup {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> TaskGroup {
        TaskGroup {
            name: name.into(),
            tasks,
        }
    }

    /// An anonymous group holding one task, the shape an ungrouped task
    /// line parses into.
    pub fn singleton(task: Task) -> TaskGroup {
        TaskGroup {
            name: String::new(),
            tasks: vec![task],
        }
    }

    /// True when this group holds exactly one task (serializes bare).
    pub fn is_singleton(&self) -> bool {
        self.tasks.len() == 1
    }

    /// The earliest due date among the group's tasks. The UI anchors a
    /// group's bar at this end.
    pub fn nearest_due_date(&self) -> Option<NaiveDate> {
        self.tasks.iter().map(Task::due_date).min()
    }

    /// The latest due date among the group's tasks; the other bar end.
    pub fn furthest_due_date(&self) -> Option<NaiveDate> {
        self.tasks.iter().map(Task::due_date).max()
    }
}
