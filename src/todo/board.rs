use super::error::TaskError;
use super::list::TaskList;
use super::priority::Priority;
use super::task::Task;
use crate::storage::{KeyValueStore, StorageError, load_tasks, save_tasks};
use tracing::{debug, warn};

/// A task list bound to the store it was loaded from. Every successful
/// mutation is written back to the store before the call returns. A rejected
/// mutation writes nothing, and a failed write puts the list back the way it
/// was.
#[derive(Debug)]
pub struct TaskBoard<S: KeyValueStore> {
    list: TaskList,
    store: S,
}

impl<S: KeyValueStore> TaskBoard<S> {
    pub fn load(store: S) -> Result<Self, StorageError> {
        let list = load_tasks(&store)?;
        debug!(count = list.len(), "task board loaded");
        Ok(Self { list, store })
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.items()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.list.open_count()
    }

    pub fn add(&mut self, text: &str, priority: Priority) -> Result<(), TaskError> {
        self.apply(|list| Ok(list.add(text, priority)?))?;
        debug!(priority = %priority, "task added");
        Ok(())
    }

    pub fn toggle_complete(&mut self, index: usize) -> Result<(), TaskError> {
        self.apply(|list| list.toggle_complete(index))?;
        debug!(index, "task toggled");
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        let task = self.apply(|list| list.remove(index))?;
        debug!(index, "task removed");
        Ok(task)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), TaskError> {
        self.apply(|list| list.reorder(from, to))?;
        debug!(from, to, "task moved");
        Ok(())
    }

    /// Replace the in-memory list with what the store currently holds.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        self.list = load_tasks(&self.store)?;
        debug!(count = self.list.len(), "task board reloaded");
        Ok(())
    }

    /// Run `mutate` on the list and write the result to the store.
    fn apply<T>(
        &mut self,
        mutate: impl FnOnce(&mut TaskList) -> Result<T, TaskError>,
    ) -> Result<T, TaskError> {
        let snapshot = self.list.clone();
        let value = mutate(&mut self.list)?;
        if let Err(e) = save_tasks(&mut self.store, self.list.items()) {
            warn!("Could not save tasks, undoing change: {}", e);
            self.list = snapshot;
            return Err(e.into());
        }
        Ok(value)
    }
}
