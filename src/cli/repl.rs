//! Interactive line-mode shell

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::parser;
use crate::tracker::Tracker;

pub fn run(file: &Path) -> Result<()> {
    let mut tracker = Tracker::open(file)?;

    println!("Hello! What can I do for you?");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // EOF ends the session like `bye` does.
            println!();
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // The tracker answers `bye` like any other command; the shell
        // only decides to stop reading afterwards.
        let is_exit = parser::split_command(&line).0 == "bye";
        match tracker.execute(&line) {
            Ok(reply) => println!("{reply}"),
            Err(e) => println!("Error: {e}"),
        }
        if is_exit {
            break;
        }
    }

    Ok(())
}
