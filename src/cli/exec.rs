//! `taskden exec` command implementation

use anyhow::Result;
use std::path::Path;

use super::definition::ExecArgs;
use crate::tracker::Tracker;

/// Run a single command line against the data file and print the reply.
/// Unlike the chat shell, save errors surface here.
pub fn run(file: &Path, args: ExecArgs) -> Result<()> {
    let mut tracker = Tracker::open(file)?;
    let reply = tracker.execute(&args.line)?;
    println!("{reply}");
    Ok(())
}
