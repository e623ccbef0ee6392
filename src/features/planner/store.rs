//! Task persistence.
//!
//! Tasks live in `~/.serein/tasks.json` as a plain JSON array so other tools
//! can read and edit them.

use std::path::PathBuf;

use crate::config::Paths;
use crate::error::SereinError;

use super::task::{Category, Task};

/// File-backed task store.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, SereinError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;

        Ok(Self { path: paths.tasks })
    }

    /// Create a store with a custom file path (useful for testing).
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load every task. A missing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<Task>, SereinError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the full task list back.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), SereinError> {
        let contents = serde_json::to_string_pretty(tasks)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Add a task, assigning the next free ID. Returns the stored task.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    pub fn add(&self, mut task: Task) -> Result<Task, SereinError> {
        let mut tasks = self.load()?;

        task.id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        tasks.push(task.clone());

        self.save(&tasks)?;
        Ok(task)
    }

    /// Load tasks, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails.
    pub fn list(&self, category: Option<Category>) -> Result<Vec<Task>, SereinError> {
        let mut tasks = self.load()?;

        if let Some(category) = category {
            tasks.retain(|t| t.category == category);
        }

        Ok(tasks)
    }

    /// Set a task's completion state. Returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::NotFound` for an unknown ID.
    pub fn set_completed(&self, id: u64, completed: bool) -> Result<Task, SereinError> {
        let mut tasks = self.load()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| SereinError::NotFound(format!("Task {id}")))?;

        task.completed = completed;
        let updated = task.clone();

        self.save(&tasks)?;
        Ok(updated)
    }

    /// Remove a task. Returns the removed task.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::NotFound` for an unknown ID.
    pub fn remove(&self, id: u64) -> Result<Task, SereinError> {
        let mut tasks = self.load()?;

        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| SereinError::NotFound(format!("Task {id}")))?;

        let removed = tasks.remove(index);
        self.save(&tasks)?;
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::features::planner::Priority;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TaskStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::with_path(temp_dir.path().join("tasks.json"));
        (temp_dir, store)
    }

    fn task(title: &str, category: Category) -> Task {
        Task::build(title, None, Priority::Medium, category, None).unwrap()
    }

    #[test]
    fn test_load_missing_file() {
        let (_tmp, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_tmp, store) = create_test_store();

        let first = store.add(task("first", Category::Work)).unwrap();
        let second = store.add(task("second", Category::Work)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let (_tmp, store) = create_test_store();

        store.add(task("first", Category::Work)).unwrap();
        let second = store.add(task("second", Category::Work)).unwrap();
        store.remove(1).unwrap();

        let third = store.add(task("third", Category::Work)).unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[test]
    fn test_round_trip() {
        let (_tmp, store) = create_test_store();

        store.add(task("walk", Category::Health)).unwrap();

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "walk");
        assert_eq!(tasks[0].category, Category::Health);
    }

    #[test]
    fn test_list_filters_by_category() {
        let (_tmp, store) = create_test_store();

        store.add(task("report", Category::Work)).unwrap();
        store.add(task("meditate", Category::Wellness)).unwrap();

        let wellness = store.list(Some(Category::Wellness)).unwrap();
        assert_eq!(wellness.len(), 1);
        assert_eq!(wellness[0].title, "meditate");

        assert_eq!(store.list(None).unwrap().len(), 2);
    }

    #[test]
    fn test_set_completed() {
        let (_tmp, store) = create_test_store();

        let added = store.add(task("stretch", Category::Health)).unwrap();
        let updated = store.set_completed(added.id, true).unwrap();

        assert!(updated.completed);
        assert!(store.load().unwrap()[0].completed);

        let reverted = store.set_completed(added.id, false).unwrap();
        assert!(!reverted.completed);
    }

    #[test]
    fn test_unknown_id() {
        let (_tmp, store) = create_test_store();

        assert!(matches!(
            store.set_completed(42, true),
            Err(SereinError::NotFound(_))
        ));
        assert!(matches!(store.remove(42), Err(SereinError::NotFound(_))));
    }
}
