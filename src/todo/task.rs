use super::error::ValidationError;
use super::priority::Priority;
use serde::{Deserialize, Serialize};

/// Minimum number of characters a task's text must have after trimming.
pub const MIN_TEXT_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    /// Build an open task, trimming and validating `text`.
    pub fn new(text: &str, priority: Priority) -> Result<Self, ValidationError> {
        let text = validate_text(text)?;
        Ok(Self {
            text,
            completed: false,
            priority,
        })
    }

    pub fn is_open(&self) -> bool {
        !self.completed
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Text followed by the priority label, as shown in the list.
    pub fn label(&self) -> String {
        format!("{} ({})", self.text, self.priority)
    }
}

/// Trim `text` and check it is long enough to become a task.
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort { len });
    }
    Ok(trimmed.to_string())
}
