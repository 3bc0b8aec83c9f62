use crate::error::{Result, TaskError};
use crate::fs::store::Storage;
use crate::models::task::Task;

/// Ordered task collection owning the backing store. Insertion order is
/// display order is persisted order; external numbering is 1-based.
///
/// Every structural mutation rewrites the store before returning. A failed
/// rewrite surfaces as an error but the in-memory change stays, so memory
/// and disk may diverge until the next successful save.
pub struct TaskList {
    tasks: Vec<Task>,
    store: Storage,
}

impl TaskList {
    pub fn new(store: Storage) -> Self {
        Self {
            tasks: Vec::new(),
            store,
        }
    }

    /// Replace the in-memory contents from the backing store.
    pub fn reload(&mut self) -> Result<()> {
        self.tasks = self.store.load()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task; returns the new list size.
    pub fn add(&mut self, task: Task) -> Result<usize> {
        self.tasks.push(task);
        self.store.save(&self.tasks)?;
        Ok(self.tasks.len())
    }

    /// Remove the task at the given 1-based position; returns it together
    /// with the new list size.
    pub fn remove(&mut self, one_based: usize) -> Result<(Task, usize)> {
        let idx = self.index_of(one_based)?;
        let task = self.tasks.remove(idx);
        self.store.save(&self.tasks)?;
        Ok((task, self.tasks.len()))
    }

    /// Set the done flag of the task at the given 1-based position.
    pub fn toggle(&mut self, one_based: usize, done: bool) -> Result<&Task> {
        let idx = self.index_of(one_based)?;
        self.tasks[idx].set_done(done);
        self.store.save(&self.tasks)?;
        Ok(&self.tasks[idx])
    }

    /// Tasks whose description contains the keyword, in original order.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.matches(keyword)).collect()
    }

    fn index_of(&self, one_based: usize) -> Result<usize> {
        if one_based == 0 || one_based > self.tasks.len() {
            return Err(TaskError::TaskNumberOutOfRange);
        }
        Ok(one_based - 1)
    }
}
