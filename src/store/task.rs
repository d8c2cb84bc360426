use std::path::PathBuf;
use crate::errors::StoreResult;
use super::{check_field, read_lines, write_lines};

/// Result of a positional task mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Applied,
    /// Blank text, nothing written.
    Blank,
    OutOfRange,
    /// The task at that index is not the one the caller expected.
    Stale,
}

/// Ordered task list stored one task per line. Tasks are identified by position, so deleting
/// one shifts every later index down. Nothing is cached: each call reads the file again.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Blank lines are kept as empty tasks so every later line keeps its index.
    pub fn load(&self) -> StoreResult<Vec<String>> {
        Ok(read_lines(&self.path)?
            .into_iter()
            .map(|(_, line)| line.trim().to_string())
            .collect())
    }

    pub fn save(&self, tasks: &[String]) -> StoreResult<()> {
        write_lines(&self.path, tasks)
    }

    pub fn add(&self, text: &str) -> StoreResult<TaskOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(TaskOutcome::Blank);
        }
        check_field("task", text, None)?;

        let mut tasks = self.load()?;
        tasks.push(text.to_string());
        self.save(&tasks)?;
        Ok(TaskOutcome::Applied)
    }

    /// Replaces the task at `index`. When `expected` is given it must equal the current text.
    pub fn edit(&self, index: usize, text: &str, expected: Option<&str>) -> StoreResult<TaskOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(TaskOutcome::Blank);
        }
        check_field("task", text, None)?;

        let mut tasks = self.load()?;
        let Some(slot) = tasks.get_mut(index) else {
            return Ok(TaskOutcome::OutOfRange);
        };
        if expected.is_some_and(|expected| expected.trim() != slot.as_str()) {
            return Ok(TaskOutcome::Stale);
        }
        *slot = text.to_string();
        self.save(&tasks)?;
        Ok(TaskOutcome::Applied)
    }

    pub fn delete(&self, index: usize, expected: Option<&str>) -> StoreResult<TaskOutcome> {
        let mut tasks = self.load()?;
        let Some(current) = tasks.get(index) else {
            return Ok(TaskOutcome::OutOfRange);
        };
        if expected.is_some_and(|expected| expected.trim() != current.as_str()) {
            return Ok(TaskOutcome::Stale);
        }
        tasks.remove(index);
        self.save(&tasks)?;
        Ok(TaskOutcome::Applied)
    }
}
