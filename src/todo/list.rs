use super::error::{TaskError, ValidationError};
use super::priority::Priority;
use super::task::Task;

/// Ordered collection of tasks. Display order, storage order and drag order
/// are all the order of `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Task>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Task> {
        self.items
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new open task. Nothing changes if the text is rejected.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<(), ValidationError> {
        let task = Task::new(text, priority)?;
        self.items.push(task);
        Ok(())
    }

    pub fn toggle_complete(&mut self, index: usize) -> Result<(), TaskError> {
        self.check_index(index)?;
        self.items[index].toggle();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Move the task at `from` so that it ends up at position `to`,
    /// shifting the tasks in between by one.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), TaskError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let task = self.items.remove(from);
        self.items.insert(to, task);
        Ok(())
    }

    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|task| task.is_open()).count()
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index >= self.items.len() {
            return Err(TaskError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_list() -> TaskList {
        let mut list = TaskList::new();
        list.add("First", Priority::Low).unwrap();
        list.add("Second", Priority::Medium).unwrap();
        list.add("Third", Priority::High).unwrap();
        list
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.iter().map(|task| task.text.as_str()).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.open_count(), 0);
    }

    #[test]
    fn test_add_appends_open_task() {
        let mut list = create_test_list();
        let before = list.open_count();

        list.add("Buy milk", Priority::High).unwrap();

        assert_eq!(
            list.items().last(),
            Some(&Task {
                text: "Buy milk".to_string(),
                completed: false,
                priority: Priority::High,
            })
        );
        assert_eq!(list.open_count(), before + 1);
    }

    #[test]
    fn test_add_rejects_short_text_and_leaves_list_alone() {
        let mut list = create_test_list();
        let snapshot = list.clone();

        assert_eq!(list.add("  ", Priority::Low), Err(ValidationError::Empty));
        assert_eq!(
            list.add(" hi ", Priority::Low),
            Err(ValidationError::TooShort { len: 2 })
        );
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_add_succeeds_iff_trimmed_len_at_least_three() {
        let inputs = ["", " ", "a", "ab", " ab ", "abc", "  abc  ", "a  b", "\tx\t"];
        for input in inputs {
            let mut list = TaskList::new();
            let expected = input.trim().chars().count() >= 3;
            assert_eq!(list.add(input, Priority::Low).is_ok(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut list = TaskList::new();
        list.add("Same", Priority::Low).unwrap();
        list.add("Same", Priority::Low).unwrap();
        assert_eq!(list.len(), 2);

        list.toggle_complete(1).unwrap();
        assert!(!list.items()[0].completed);
        assert!(list.items()[1].completed);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut list = create_test_list();
        list.toggle_complete(1).unwrap();
        assert!(list.items()[1].completed);
        assert_eq!(list.open_count(), 2);

        list.toggle_complete(1).unwrap();
        assert!(!list.items()[1].completed);
        assert_eq!(list.open_count(), 3);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut list = create_test_list();
        let err = list.toggle_complete(3).unwrap_err();
        assert!(matches!(err, TaskError::IndexOutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn test_remove_open_task() {
        let mut list = create_test_list();
        let removed = list.remove(1).unwrap();

        assert_eq!(removed.text, "Second");
        assert_eq!(list.len(), 2);
        assert_eq!(list.open_count(), 2);
        assert_eq!(texts(&list), vec!["First", "Third"]);
    }

    #[test]
    fn test_remove_completed_task_keeps_open_count() {
        let mut list = create_test_list();
        list.toggle_complete(0).unwrap();
        assert_eq!(list.open_count(), 2);

        list.remove(0).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.open_count(), 2);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut list = TaskList::new();
        assert!(list.remove(0).is_err());
    }

    #[test]
    fn test_reorder_forward() {
        let mut list = create_test_list();
        list.reorder(0, 2).unwrap();
        assert_eq!(texts(&list), vec!["Second", "Third", "First"]);
    }

    #[test]
    fn test_reorder_backward() {
        let mut list = create_test_list();
        list.reorder(2, 0).unwrap();
        assert_eq!(texts(&list), vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut list = create_test_list();
        list.reorder(1, 1).unwrap();
        assert_eq!(texts(&list), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_reorder_out_of_range_fails_without_change() {
        let mut list = create_test_list();
        let snapshot = list.clone();

        assert!(matches!(
            list.reorder(5, 0),
            Err(TaskError::IndexOutOfBounds { index: 5, len: 3 })
        ));
        assert!(matches!(
            list.reorder(0, 3),
            Err(TaskError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert_eq!(list, snapshot);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn text() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<String>(),
            "[ \t\n]{0,3}[a-zé]{0,5}[ \t\n]{0,3}",
        ]
    }

    proptest! {
        /// A task is accepted exactly when its trimmed text has at least three characters.
        #[test]
        fn add_accepts_iff_trimmed_len_at_least_three(text in text()) {
            let mut list = TaskList::new();
            let expected = text.trim().chars().count() >= 3;
            prop_assert_eq!(list.add(&text, Priority::Medium).is_ok(), expected);
            prop_assert_eq!(list.len(), usize::from(expected));
        }

        /// Adding stores the trimmed text as an open task at the end.
        #[test]
        fn add_appends_trimmed_open_task(text in "[ \t]{0,3}[a-z]{3,8}[ \t]{0,3}") {
            let mut list = TaskList::new();
            list.add("Existing", Priority::Low).expect("seed");
            list.add(&text, Priority::High).expect("add");

            let last = &list.items()[1];
            prop_assert_eq!(last.text.as_str(), text.trim());
            prop_assert!(!last.completed);
            prop_assert_eq!(list.open_count(), 2);
        }
    }
}
