//! CLI shell around the tracker core

pub mod definition;
pub mod exec;
pub mod repl;

pub use definition::{Cli, Commands};

use std::path::PathBuf;

/// Default data file: `<platform data dir>/taskden/tasks.txt`, or
/// `./data/tasks.txt` when no platform data dir is known.
pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("taskden").join("tasks.txt"),
        None => PathBuf::from("./data/tasks.txt"),
    }
}
