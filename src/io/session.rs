use std::io;
use std::path::{Path, PathBuf};

use crate::model::group::TaskGroup;
use crate::parse::diagnostics::Diagnostic;

use super::task_file::{self, TaskFileError, WriteDecision};

/// Conventional task file name, used when a session is pointed at a
/// directory rather than an explicit file.
pub const TASK_FILE_NAME: &str = "tasks.txt";

/// Owns the location of one board's task file.
///
/// The application controller constructs a `Session` and threads it
/// through every load and save; the path lives nowhere else. Reverting
/// unsaved edits is just another [`Session::load`]: the collection is
/// rebuilt from disk, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    task_file: PathBuf,
}

impl Session {
    pub fn new(task_file: impl Into<PathBuf>) -> Session {
        Session {
            task_file: task_file.into(),
        }
    }

    /// A session over the conventional `tasks.txt` inside `dir`.
    pub fn in_dir(dir: &Path) -> Session {
        Session {
            task_file: dir.join(TASK_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.task_file
    }

    /// Load the whole board. See [`task_file::load_all_tasks`].
    pub fn load(
        &self,
        on_diagnostic: impl FnMut(Diagnostic),
    ) -> Result<Vec<TaskGroup>, TaskFileError> {
        task_file::load_all_tasks(&self.task_file, on_diagnostic)
    }

    /// Rewrite the board's file in full. See [`task_file::save_all_tasks`].
    pub fn save(
        &self,
        groups: &[TaskGroup],
        on_write_anomaly: impl FnMut(&io::Error) -> WriteDecision,
    ) {
        task_file::save_all_tasks(&self.task_file, groups, on_write_anomaly)
    }
}
