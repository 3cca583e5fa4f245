use super::{KeyValueStore, StorageError};
use crate::todo::task::validate_text;
use crate::todo::{Task, TaskList};
use tracing::{debug, warn};

/// Key under which the whole task list is stored.
pub const TASKS_KEY: &str = "tasks";

/// Load the task list. An absent key gives an empty list, and so does a value
/// that is not a JSON array of task records. Records whose text would not pass
/// validation are dropped; the others come back exactly as stored.
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S) -> Result<TaskList, StorageError> {
    let Some(raw) = store.get(TASKS_KEY)? else {
        debug!("no stored tasks");
        return Ok(TaskList::new());
    };

    let tasks: Vec<Task> = match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!("Ignoring malformed stored tasks: {}", e);
            return Ok(TaskList::new());
        }
    };

    let total = tasks.len();
    let tasks: Vec<Task> = tasks
        .into_iter()
        .filter(|task| match validate_text(&task.text) {
            Ok(_) => true,
            Err(e) => {
                warn!(text = %task.text, "Dropping stored task: {}", e);
                false
            }
        })
        .collect();

    debug!(loaded = tasks.len(), dropped = total - tasks.len(), "loaded tasks");
    Ok(TaskList::with_items(tasks))
}

/// Serialize the full list and write it under [`TASKS_KEY`].
pub fn save_tasks<S: KeyValueStore + ?Sized>(
    store: &mut S,
    tasks: &[Task],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(tasks)?;
    store.set(TASKS_KEY, &json)?;
    debug!(count = tasks.len(), "saved tasks");
    Ok(())
}
