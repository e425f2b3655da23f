//! Task data model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

/// Field delimiter of the storage format; forbidden inside descriptions.
pub const DELIMITER: char = '|';

/// Date format used when rendering tasks for display.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d %Y %H:%M";

/// The task variant and its date payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Plain todo, no dates attached.
    Todo,
    /// Task due by a point in time.
    Deadline { by: NaiveDateTime },
    /// Task spanning a time range; `from` is strictly before `to`.
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-character type tag used in display and storage.
    pub fn icon(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// A task: description, completion flag, tag set, and variant payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    done: bool,
    tags: BTreeSet<String>,
    kind: TaskKind,
}

impl Task {
    /// Create a plain todo.
    pub fn todo(description: impl Into<String>) -> Result<Self> {
        Self::new(description.into(), TaskKind::Todo)
    }

    /// Create a deadline task.
    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Result<Self> {
        Self::new(description.into(), TaskKind::Deadline { by })
    }

    /// Create an event. Fails unless `from` is strictly before `to`.
    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self> {
        if from >= to {
            return Err(Error::InvalidTimeRange);
        }
        Self::new(description.into(), TaskKind::Event { from, to })
    }

    fn new(description: String, kind: TaskKind) -> Result<Self> {
        validate_description(&description)?;
        Ok(Self {
            description,
            done: false,
            tags: BTreeSet::new(),
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Mark as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark as not done. Idempotent.
    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// Tags in lexicographic order, without the `#` prefix.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }

    /// Add a tag. Normalizes to lowercase; set semantics, so adding an
    /// existing tag is a no-op.
    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag)?;
        self.tags.insert(tag);
        Ok(())
    }

    /// Remove a tag. Returns whether the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(&tag.to_lowercase())
    }

    /// Restore a tag set loaded from storage. Lowercases each entry and
    /// drops empty ones rather than failing, matching the tolerant load
    /// policy.
    pub(crate) fn restore_tags<'a>(&mut self, tags: impl Iterator<Item = &'a str>) {
        for tag in tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() {
                self.tags.insert(tag);
            }
        }
    }

    /// Restore the done flag loaded from storage.
    pub(crate) fn restore_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Status glyph: 'X' when done, ' ' otherwise.
    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Tags rendered as `#tag1 #tag2`, lexicographic; empty string when
    /// there are none.
    pub fn tags_string(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.icon(),
            self.status_icon(),
            self.description
        )?;

        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(DISPLAY_DATE_FORMAT))?;
            }
            TaskKind::Event { from, to } => {
                write!(
                    f,
                    " (from: {} to: {})",
                    from.format(DISPLAY_DATE_FORMAT),
                    to.format(DISPLAY_DATE_FORMAT)
                )?;
            }
        }

        if !self.tags.is_empty() {
            write!(f, " {}", self.tags_string())?;
        }
        Ok(())
    }
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    if description.contains(DELIMITER) {
        return Err(Error::IllegalCharacter(DELIMITER));
    }
    Ok(())
}

fn normalize_tag(tag: &str) -> Result<String> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return Err(Error::EmptyTag);
    }
    for c in tag.chars() {
        if c == '|' || c == ',' || c == '#' || c.is_whitespace() {
            return Err(Error::IllegalTagCharacter(c));
        }
    }
    Ok(tag)
}
