//! Taskden library - command parsing, task model, and flat-file persistence
//!
//! The core is shell-agnostic: [`tracker::Tracker`] takes one line of
//! input and returns one reply string, so a line-mode loop and a chat
//! GUI drive the same code.

pub mod cli;
pub mod error;
pub mod parser;
pub mod storage;
pub mod task;
pub mod tracker;

pub use error::{Error, Result};
