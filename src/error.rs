//! Crate-wide error types

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the core can report. All variants are recoverable: the
/// caller surfaces the message and carries on, nothing here terminates
/// the process.
#[derive(Debug, Error)]
pub enum Error {
    // Validation: bad user input discovered while building a task.
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Task description cannot contain '{0}'")]
    IllegalCharacter(char),

    #[error("Tag name cannot be empty")]
    EmptyTag,

    #[error("Tag name cannot contain '{0}'")]
    IllegalTagCharacter(char),

    // Parse: malformed command structure.
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("'{0}' is not a valid task number")]
    InvalidNumber(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter {0} was given more than once")]
    DuplicateParameter(&'static str),

    #[error("Invalid date '{0}', expected yyyy-MM-dd HHmm (e.g. 2026-03-01 1800)")]
    InvalidDateFormat(String),

    #[error("An event must start before it ends")]
    InvalidTimeRange,

    #[error("Search keyword cannot be empty")]
    EmptyKeyword,

    #[error("Missing tag, expected: tag <number> #<name>")]
    MissingTag,

    #[error("Tags must start with '#'")]
    MissingHashPrefix,

    // Range: task number outside the list. `number` is the 1-based
    // number the user typed.
    #[error("Task {number} does not exist, the list has {count} tasks")]
    IndexOutOfRange { number: usize, count: usize },

    // Storage.
    #[error("Storage path cannot be empty")]
    EmptyStoragePath,

    #[error("Failed to read tasks from {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write tasks to {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
