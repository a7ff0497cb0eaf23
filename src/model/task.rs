use chrono::NaiveDate;
use serde::Serialize;

use crate::util::dates::{current_date, delta_days};

/// A named item with a due date.
///
/// `days_remaining` is derived from the due date and a reference date
/// (normally "today") and is recomputed whenever either changes; it is
/// never set directly. The fields are private so that invariant can't be
/// broken from outside.
///
/// Serializes for export to the UI/agent layer; there is deliberately no
/// `Deserialize`, because a deserialized `days_remaining` could disagree
/// with the due date. Tasks are rebuilt from the task file instead.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    due_date: NaiveDate,
    days_remaining: i64,
    name: String,
}

impl Task {
    /// Create a task, computing `days_remaining` against today's date.
    pub fn new(due_date: NaiveDate, name: impl Into<String>) -> Task {
        Task::with_reference(due_date, name, current_date())
    }

    /// Create a task with an explicit reference date. The parser uses this
    /// so every task of one load shares the same "today".
    pub fn with_reference(
        due_date: NaiveDate,
        name: impl Into<String>,
        reference: NaiveDate,
    ) -> Task {
        Task {
            due_date,
            days_remaining: delta_days(due_date, reference),
            name: name.into(),
        }
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Days until the due date as of the reference date this task was last
    /// computed against. Negative for overdue tasks.
    pub fn days_remaining(&self) -> i64 {
        self.days_remaining
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the due date, recomputing `days_remaining` against today.
    /// The reference date is not stored; it is re-fetched on every mutation.
    pub fn set_due_date(&mut self, new_due_date: NaiveDate) {
        self.due_date = new_due_date;
        self.days_remaining = delta_days(new_due_date, current_date());
    }

    pub fn set_name(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    /// Strict ordering on due date only, for stable sorts.
    pub fn due_date_is_earlier(lhs: &Task, rhs: &Task) -> bool {
        lhs.due_date < rhs.due_date
    }

    /// Strict ordering on due date only, inverse of [`Task::due_date_is_earlier`].
    pub fn due_date_is_later(lhs: &Task, rhs: &Task) -> bool {
        lhs.due_date > rhs.due_date
    }
}

impl PartialEq for Task {
    /// Structural equality: name and due date. `days_remaining` depends on
    /// when the task was built, so it does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.due_date == other.due_date
    }
}

impl Eq for Task {}
