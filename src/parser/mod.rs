//! Command parsing
//!
//! Pure functions mapping one line of user input to a typed [`Command`]
//! or a typed failure. Sub-fields inside a command line are delimited by
//! literal markers (`/by `, `/from `, `/to `); each marker must occur
//! exactly once, so ambiguous input like two `/by` clauses is rejected
//! instead of silently split at the first match.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::task::Task;

/// Date format accepted in commands, e.g. `2026-03-01 1800`. Calendar
/// validation is strict: Feb 30 is rejected, not rolled over.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d %H%M";

/// A fully parsed and validated user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a task built by one of the `todo`/`deadline`/`event` commands.
    Add(Task),
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
    Tag { index: usize, tag: String },
    Untag { index: usize, tag: String },
    Bye,
}

/// Split a line into its command word and argument string. Splits on the
/// first run of whitespace; blank input yields two empty strings.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    }
}

/// Parse one input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command> {
    let (command, args) = split_command(line);
    match command {
        "bye" => Ok(Command::Bye),
        "list" => Ok(Command::List),
        "todo" => parse_todo(args).map(Command::Add),
        "deadline" => parse_deadline(args).map(Command::Add),
        "event" => parse_event(args).map(Command::Add),
        "mark" => parse_task_index(args).map(Command::Mark),
        "unmark" => parse_task_index(args).map(Command::Unmark),
        "delete" => parse_task_index(args).map(Command::Delete),
        "find" => parse_find(args).map(Command::Find),
        "tag" => parse_tag_command(args).map(|(index, tag)| Command::Tag { index, tag }),
        "untag" => parse_tag_command(args).map(|(index, tag)| Command::Untag { index, tag }),
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

/// Parse a 1-based task number into a 0-based index.
pub fn parse_task_index(token: &str) -> Result<usize> {
    let token = token.trim();
    let number: i64 = token
        .parse()
        .map_err(|_| Error::InvalidNumber(token.to_string()))?;
    // User numbering starts at 1.
    if number < 1 {
        return Err(Error::InvalidNumber(token.to_string()));
    }
    Ok((number - 1) as usize)
}

/// Parse `todo` arguments into a todo task.
pub fn parse_todo(args: &str) -> Result<Task> {
    Task::todo(args.trim())
}

/// Parse `deadline` arguments: `<description> /by <yyyy-MM-dd HHmm>`.
pub fn parse_deadline(args: &str) -> Result<Task> {
    if args.trim().is_empty() {
        return Err(Error::MissingParameter("/by"));
    }
    let (description, by_token) = split_at_marker(args, "/by ", "/by")?;
    if by_token.is_empty() {
        return Err(Error::MissingParameter("/by"));
    }
    let by = parse_date(by_token)?;
    Task::deadline(description, by)
}

/// Parse `event` arguments:
/// `<description> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm>`.
///
/// The start must be strictly before the end.
pub fn parse_event(args: &str) -> Result<Task> {
    if args.trim().is_empty() {
        return Err(Error::MissingParameter("/from"));
    }
    require_single_marker(args, "/from ", "/from")?;
    require_single_marker(args, "/to ", "/to")?;

    // Counts are exactly one, so the first split cannot fail.
    let (description, rest) = args
        .split_once("/from ")
        .ok_or(Error::MissingParameter("/from"))?;
    // A /to sitting before /from leaves the from clause unterminated.
    let (from_token, to_token) = rest
        .split_once("/to ")
        .ok_or(Error::MissingParameter("/to"))?;

    let from_token = from_token.trim();
    let to_token = to_token.trim();
    if from_token.is_empty() {
        return Err(Error::MissingParameter("/from"));
    }
    if to_token.is_empty() {
        return Err(Error::MissingParameter("/to"));
    }

    let from = parse_date(from_token)?;
    let to = parse_date(to_token)?;
    Task::event(description.trim(), from, to)
}

/// Parse `find` arguments into a non-blank search keyword.
pub fn parse_find(args: &str) -> Result<String> {
    let keyword = args.trim();
    if keyword.is_empty() {
        return Err(Error::EmptyKeyword);
    }
    Ok(keyword.to_string())
}

/// Parse `tag`/`untag` arguments: `<number> #<name>`. Returns the
/// 0-based index and the tag name without its `#` prefix. Character
/// validation of the name itself happens when the tag is applied.
pub fn parse_tag_command(args: &str) -> Result<(usize, String)> {
    let args = args.trim();
    let (index_token, tag_token) = args
        .split_once(char::is_whitespace)
        .ok_or(Error::MissingTag)?;
    let index = parse_task_index(index_token)?;

    let tag_token = tag_token.trim();
    if tag_token.is_empty() {
        return Err(Error::MissingTag);
    }
    let name = tag_token
        .strip_prefix('#')
        .ok_or(Error::MissingHashPrefix)?;
    Ok((index, name.to_string()))
}

fn parse_date(token: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(token, INPUT_DATE_FORMAT)
        .map_err(|_| Error::InvalidDateFormat(token.to_string()))
}

/// Split `args` around a marker that must occur exactly once. Returns
/// the trimmed text before and after the marker.
fn split_at_marker<'a>(
    args: &'a str,
    marker: &str,
    name: &'static str,
) -> Result<(&'a str, &'a str)> {
    require_single_marker(args, marker, name)?;
    let (before, after) = args.split_once(marker).ok_or(Error::MissingParameter(name))?;
    Ok((before.trim(), after.trim()))
}

fn require_single_marker(args: &str, marker: &str, name: &'static str) -> Result<()> {
    match args.matches(marker).count() {
        0 => Err(Error::MissingParameter(name)),
        1 => Ok(()),
        _ => Err(Error::DuplicateParameter(name)),
    }
}
