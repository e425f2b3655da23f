//! Task model and collection

pub mod list;
pub mod model;

pub use list::TaskList;
pub use model::{Task, TaskKind, DELIMITER, DISPLAY_DATE_FORMAT};
