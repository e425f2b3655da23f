//! Command-line definition

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "taskden",
    version,
    about = "Single-user task tracker with line commands"
)]
pub struct Cli {
    /// Path to the task data file
    #[arg(short = 'f', long = "file", env = "TASKDEN_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single command line and exit
    Exec(ExecArgs),
}

#[derive(Args)]
pub struct ExecArgs {
    /// The command line to run, e.g. "todo read book"
    pub line: String,
}
