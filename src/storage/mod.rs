pub mod database;
pub mod memory;
pub mod tasks;

use thiserror::Error;

pub use database::SqliteStore;
pub use memory::MemoryStore;
pub use tasks::{TASKS_KEY, load_tasks, save_tasks};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("could not encode tasks: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string-to-string store that keeps its contents across runs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
