//! Taskden - single-user task tracker

use anyhow::Result;
use clap::Parser;
use taskden::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKDEN_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskden=debug")
            .init();
    }

    let cli = Cli::parse();
    let file = cli.file.unwrap_or_else(cli::default_data_file);

    match cli.command {
        Some(Commands::Exec(args)) => cli::exec::run(&file, args),
        None => cli::repl::run(&file),
    }
}
