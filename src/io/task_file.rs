use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::group::TaskGroup;
use crate::parse::diagnostics::Diagnostic;
use crate::parse::task_parser::{parse_raw_groups, split_lines, validate_groups};
use crate::parse::task_serializer::serialize_groups;
use crate::util::dates::current_date;

/// Fatal task-file errors. These abort the whole load; the caller decides
/// the UI-level response. On either variant nothing in memory was
/// modified, and the caller should avoid saving over a board it never
/// finished loading.
#[derive(Debug, thiserror::Error)]
pub enum TaskFileError {
    #[error("task file {0} does not exist or cannot be opened")]
    NotFound(PathBuf),
    #[error("could not read task file {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
}

/// The caller's answer to a failed save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    /// Attempt the write again.
    Retry,
    /// Keep the anomaly and stop trying.
    Accept,
}

/// Read and parse the whole task file.
///
/// A missing or unreadable file is a fatal, propagated error with no
/// empty-collection fallback. Grammar and due-date anomalies are non-fatal
/// and flow through `on_diagnostic` (pass
/// [`crate::parse::diagnostics::report_to_stderr`] when nothing better is
/// wired up); the load completes with every group that survived.
pub fn load_all_tasks(
    path: &Path,
    mut on_diagnostic: impl FnMut(Diagnostic),
) -> Result<Vec<TaskGroup>, TaskFileError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TaskFileError::NotFound(path.to_path_buf()),
        _ => TaskFileError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let lines = split_lines(&text);
    let raw_groups = parse_raw_groups(&lines, &mut on_diagnostic);
    Ok(validate_groups(raw_groups, current_date(), &mut on_diagnostic))
}

/// Serialize the groups and rewrite the task file in full.
///
/// On a failed write of a non-empty buffer, `on_write_anomaly` chooses
/// between another attempt and accepting the anomaly; the loop runs until
/// a clean write or acceptance. A zero-byte buffer that fails to write is
/// not treated as an anomaly.
pub fn save_all_tasks(
    path: &Path,
    groups: &[TaskGroup],
    mut on_write_anomaly: impl FnMut(&io::Error) -> WriteDecision,
) {
    let buffer = serialize_groups(groups);

    loop {
        match atomic_write(path, buffer.as_bytes()) {
            Ok(()) => break,
            Err(_) if buffer.is_empty() => break,
            Err(e) => match on_write_anomaly(&e) {
                WriteDecision::Retry => continue,
                WriteDecision::Accept => break,
            },
        }
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
