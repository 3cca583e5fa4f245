use super::task::Task;
use std::fmt;
use std::str::FromStr;

/// Which tasks the list view shows. Not persisted; every launch starts at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

pub fn visibility(task: &Task, mode: FilterMode) -> Visibility {
    let visible = match mode {
        FilterMode::All => true,
        FilterMode::Active => !task.completed,
        FilterMode::Completed => task.completed,
    };
    if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Positions of the tasks this mode shows, in list order.
    pub fn visible_indices<'a, I>(self, tasks: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks
            .into_iter()
            .enumerate()
            .filter(|(_, task)| visibility(task, self).is_visible())
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Active => write!(f, "active"),
            FilterMode::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" | "open" => Ok(FilterMode::Active),
            "completed" | "done" => Ok(FilterMode::Completed),
            _ => Err(format!("Invalid filter: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Priority;

    fn task(completed: bool) -> Task {
        Task {
            text: "Task".to_string(),
            completed,
            priority: Priority::Low,
        }
    }

    #[test]
    fn test_all_shows_everything() {
        assert_eq!(visibility(&task(false), FilterMode::All), Visibility::Visible);
        assert_eq!(visibility(&task(true), FilterMode::All), Visibility::Visible);
    }

    #[test]
    fn test_active_and_completed_are_complementary() {
        let tasks = [task(false), task(true)];

        let active: Vec<_> = tasks.iter().map(|t| visibility(t, FilterMode::Active)).collect();
        assert_eq!(active, vec![Visibility::Visible, Visibility::Hidden]);

        let completed: Vec<_> = tasks
            .iter()
            .map(|t| visibility(t, FilterMode::Completed))
            .collect();
        assert_eq!(completed, vec![Visibility::Hidden, Visibility::Visible]);
    }

    #[test]
    fn test_visible_indices() {
        let tasks = vec![task(false), task(true), task(false), task(true)];
        assert_eq!(FilterMode::All.visible_indices(&tasks), vec![0, 1, 2, 3]);
        assert_eq!(FilterMode::Active.visible_indices(&tasks), vec![0, 2]);
        assert_eq!(FilterMode::Completed.visible_indices(&tasks), vec![1, 3]);
    }

    #[test]
    fn test_visible_indices_empty() {
        let tasks: Vec<Task> = Vec::new();
        assert!(FilterMode::Active.visible_indices(&tasks).is_empty());
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(FilterMode::All.next(), FilterMode::Active);
        assert_eq!(FilterMode::Active.next(), FilterMode::Completed);
        assert_eq!(FilterMode::Completed.next(), FilterMode::All);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("Active".parse::<FilterMode>().unwrap(), FilterMode::Active);
        assert_eq!("done".parse::<FilterMode>().unwrap(), FilterMode::Completed);
        assert!("pending".parse::<FilterMode>().is_err());
    }
}
