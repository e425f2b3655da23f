//! Command orchestration
//!
//! [`Tracker`] wires the parser, the task list, and storage together:
//! one line of input in, one reply string out. It never prints and never
//! terminates the process; the shell around it decides how replies and
//! errors reach the user.

use std::path::PathBuf;
use tracing::warn;

use crate::error::Result;
use crate::parser::{self, Command};
use crate::storage::Storage;
use crate::task::{Task, TaskList};

pub struct Tracker {
    storage: Storage,
    tasks: TaskList,
}

impl Tracker {
    /// Open a tracker backed by the given data file. An unreadable file
    /// degrades to an empty list with a warning instead of failing; only
    /// a structurally invalid (empty) path is rejected here.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let storage = Storage::new(path)?;
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Could not load saved tasks, starting empty: {}", e);
                TaskList::new()
            }
        };
        Ok(Self { storage, tasks })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Run one command, saving after any mutation. Save failures
    /// propagate to the caller; the in-memory change is kept either way.
    /// This is the line-mode entry point.
    pub fn execute(&mut self, line: &str) -> Result<String> {
        let command = parser::parse_command(line)?;
        let outcome = self.apply(command)?;
        if outcome.dirty {
            self.storage.save(&self.tasks)?;
        }
        Ok(outcome.message)
    }

    /// Run one command and always produce a reply string. Parse and
    /// range failures come back as their message; save failures are
    /// logged and swallowed. This is the chat-shell entry point.
    pub fn respond(&mut self, line: &str) -> String {
        let command = match parser::parse_command(line) {
            Ok(command) => command,
            Err(e) => return e.to_string(),
        };
        match self.apply(command) {
            Ok(outcome) => {
                if outcome.dirty {
                    if let Err(e) = self.storage.save(&self.tasks) {
                        warn!("Failed to save tasks: {}", e);
                    }
                }
                outcome.message
            }
            Err(e) => e.to_string(),
        }
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Bye => Ok(Outcome::read_only(
                "Bye. Hope to see you again soon!".to_string(),
            )),
            Command::List => Ok(Outcome::read_only(render_list(
                &self.tasks.iter().collect::<Vec<_>>(),
                "Here are the tasks in your list:",
                "Your task list is empty.",
            ))),
            Command::Add(task) => {
                self.tasks.add(task);
                let task = self.tasks.get(self.tasks.len() - 1)?;
                Ok(Outcome::mutated(format!(
                    "Got it. I've added this task:\n  {task}\nNow you have {} tasks in the list.",
                    self.tasks.len()
                )))
            }
            Command::Mark(index) => {
                let task = self.tasks.mark(index)?;
                Ok(Outcome::mutated(format!(
                    "Nice! I've marked this task as done:\n  {task}"
                )))
            }
            Command::Unmark(index) => {
                let task = self.tasks.unmark(index)?;
                Ok(Outcome::mutated(format!(
                    "OK, I've marked this task as not done yet:\n  {task}"
                )))
            }
            Command::Delete(index) => {
                let task = self.tasks.remove(index)?;
                Ok(Outcome::mutated(format!(
                    "Noted. I've removed this task:\n  {task}\nNow you have {} tasks in the list.",
                    self.tasks.len()
                )))
            }
            Command::Find(keyword) => {
                let matches = self.tasks.find(&keyword);
                Ok(Outcome::read_only(render_list(
                    &matches,
                    "Here are the matching tasks in your list:",
                    "No matching tasks found in your list.",
                )))
            }
            Command::Tag { index, tag } => {
                let task = self.tasks.get_mut(index)?;
                task.add_tag(&tag)?;
                Ok(Outcome::mutated(format!("Tagged task: {task}")))
            }
            Command::Untag { index, tag } => {
                let task = self.tasks.get_mut(index)?;
                task.remove_tag(&tag);
                Ok(Outcome::mutated(format!("Removed tag from task: {task}")))
            }
        }
    }
}

struct Outcome {
    message: String,
    dirty: bool,
}

impl Outcome {
    fn read_only(message: String) -> Self {
        Self {
            message,
            dirty: false,
        }
    }

    fn mutated(message: String) -> Self {
        Self {
            message,
            dirty: true,
        }
    }
}

fn render_list(tasks: &[&Task], header: &str, empty: &str) -> String {
    if tasks.is_empty() {
        return empty.to_string();
    }
    let mut out = header.to_string();
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!("\n{}.{task}", i + 1));
    }
    out
}
