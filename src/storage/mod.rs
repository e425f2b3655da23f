//! Flat-file task persistence
//!
//! One task per line, fields joined by `" | "`:
//!
//! ```text
//! T | <0|1> | <description> | <comma-separated-tags>
//! D | <0|1> | <description> | <yyyy-MM-dd HH:mm> | <tags>
//! E | <0|1> | <description> | <yyyy-MM-dd HH:mm> | <yyyy-MM-dd HH:mm> | <tags>
//! ```
//!
//! Loading is corruption tolerant: a line that does not decode (wrong
//! field count, bad date, unknown type marker) is skipped with a warning
//! so one bad record never loses the rest of the file.

use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Error, Result};
use crate::task::{Task, TaskKind, TaskList};

/// Date format used inside the data file.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const FIELD_SEPARATOR: &str = " | ";

/// Handle to the task data file.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a storage handle. The only structurally invalid path is an
    /// empty one, rejected here; everything else surfaces at load/save.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyStoragePath);
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks. A missing file (or missing parent directory) is
    /// not an error: the directory is created and an empty list comes
    /// back. Only an I/O-level read failure is fatal to the call.
    pub fn load(&self) -> Result<TaskList> {
        self.create_parent_dir().map_err(|source| Error::StorageRead {
            path: self.path.clone(),
            source,
        })?;

        if !self.path.exists() {
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| Error::StorageRead {
            path: self.path.clone(),
            source,
        })?;

        let mut tasks = TaskList::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_task(line) {
                Some(task) => tasks.add(task),
                None => warn!(
                    "Skipping corrupted record at {}:{}",
                    self.path.display(),
                    number + 1
                ),
            }
        }
        Ok(tasks)
    }

    /// Save the whole list, overwriting the file. The file matches the
    /// in-memory list exactly after a successful save.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        self.create_parent_dir().map_err(|source| Error::StorageWrite {
            path: self.path.clone(),
            source,
        })?;

        let mut content = String::new();
        for task in tasks.iter() {
            content.push_str(&encode_task(task));
            content.push('\n');
        }

        fs::write(&self.path, content).map_err(|source| Error::StorageWrite {
            path: self.path.clone(),
            source,
        })
    }

    fn create_parent_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Encode one task as a storage line (without the trailing newline).
pub fn encode_task(task: &Task) -> String {
    let done = if task.is_done() { "1" } else { "0" };
    let tags = task.tags().collect::<Vec<_>>().join(",");

    match task.kind() {
        TaskKind::Todo => format!("T | {done} | {} | {tags}", task.description()),
        TaskKind::Deadline { by } => format!(
            "D | {done} | {} | {} | {tags}",
            task.description(),
            by.format(STORED_DATE_FORMAT)
        ),
        TaskKind::Event { from, to } => format!(
            "E | {done} | {} | {} | {} | {tags}",
            task.description(),
            from.format(STORED_DATE_FORMAT),
            to.format(STORED_DATE_FORMAT)
        ),
    }
}

/// Decode one storage line. Returns `None` for anything that does not
/// match the format exactly; callers treat that as a corrupt record.
pub fn decode_task(line: &str) -> Option<Task> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < 4 {
        return None;
    }

    let done = match parts[1] {
        "0" => false,
        "1" => true,
        _ => return None,
    };
    let description = parts[2];

    let (mut task, tags_field) = match parts[0] {
        "T" if parts.len() == 4 => (Task::todo(description).ok()?, parts[3]),
        "D" if parts.len() == 5 => {
            let by = parse_stored_date(parts[3])?;
            (Task::deadline(description, by).ok()?, parts[4])
        }
        "E" if parts.len() == 6 => {
            let from = parse_stored_date(parts[3])?;
            let to = parse_stored_date(parts[4])?;
            (Task::event(description, from, to).ok()?, parts[5])
        }
        _ => return None,
    };

    task.restore_done(done);
    task.restore_tags(tags_field.split(','));
    Some(task)
}

fn parse_stored_date(token: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(token, STORED_DATE_FORMAT).ok()
}
