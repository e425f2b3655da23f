//! Ordered task collection

use crate::error::{Error, Result};

use super::model::Task;

/// Insertion-ordered list of tasks. Indices are 0-based here; the parser
/// converts the user's 1-based numbering before calling in.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Append a task to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or(self.out_of_range(index))
    }

    /// Remove and return the task at `index`, shifting later tasks up.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Mark the task at `index` as done.
    pub fn mark(&mut self, index: usize) -> Result<&Task> {
        let err = self.out_of_range(index);
        let task = self.tasks.get_mut(index).ok_or(err)?;
        task.mark_done();
        Ok(task)
    }

    /// Mark the task at `index` as not done.
    pub fn unmark(&mut self, index: usize) -> Result<&Task> {
        let err = self.out_of_range(index);
        let task = self.tasks.get_mut(index).ok_or(err)?;
        task.mark_not_done();
        Ok(task)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let err = self.out_of_range(index);
        self.tasks.get_mut(index).ok_or(err)
    }

    /// Case-insensitive substring search over descriptions only; tags and
    /// dates are not searched. Returns a read-only view preserving list
    /// order; no matches yields an empty view.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let keyword = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.description().to_lowercase().contains(&keyword))
            .collect()
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            number: index + 1,
            count: self.tasks.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn list_of(descriptions: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for d in descriptions {
            list.add(Task::todo(*d).unwrap());
        }
        list
    }

    #[test]
    fn test_add_and_get() {
        let list = list_of(&["read book", "write report"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().description(), "read book");
        assert_eq!(list.get(1).unwrap().description(), "write report");
    }

    #[test]
    fn test_get_out_of_range() {
        let list = list_of(&["read book"]);
        assert!(list.get(0).is_ok());
        assert!(matches!(
            list.get(1),
            Err(Error::IndexOutOfRange { number: 2, count: 1 })
        ));

        let empty = TaskList::new();
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn test_remove_shifts_order() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.description(), "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description(), "c");

        assert!(list.remove(5).is_err());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_mark_and_unmark() {
        let mut list = list_of(&["read book"]);
        assert!(list.mark(0).unwrap().is_done());
        assert!(list.mark(0).unwrap().is_done());
        assert!(!list.unmark(0).unwrap().is_done());
        assert!(!list.unmark(0).unwrap().is_done());
        assert!(list.mark(3).is_err());
    }

    #[test]
    fn test_find_case_insensitive() {
        let list = list_of(&["Read Book", "buy milk", "book flight"]);
        let matches = list.find("BOOK");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].description(), "Read Book");
        assert_eq!(matches[1].description(), "book flight");
    }

    #[test]
    fn test_find_searches_descriptions_not_tags() {
        let mut list = list_of(&["read book"]);
        list.get_mut(0).unwrap().add_tag("urgent").unwrap();
        assert!(list.find("urgent").is_empty());
        assert!(list.find("nothing").is_empty());
    }
}
