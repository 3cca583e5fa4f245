//! Pointer-driven reordering.
//!
//! The renderer records where each visible task row sits on screen. While a
//! row is dragged, the pointer's vertical position is matched against the
//! midpoints of the other rows: the dragged task goes right before the first
//! row whose midpoint lies below the pointer, or at the end of the list when
//! the pointer is below every row.

/// Screen placement of one rendered task row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    /// Position of the task in the list (not in the filtered view).
    pub index: usize,
    pub top: f64,
    pub height: f64,
}

impl RowGeometry {
    pub fn new(index: usize, top: f64, height: f64) -> Self {
        Self { index, top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Insert right before the task at this list position.
    Before(usize),
    End,
}

/// Find where a dragged row belongs for a pointer at `y`.
///
/// `rows` must not contain the dragged row itself. Among rows whose midpoint
/// is below `y`, the one closest to `y` wins; on equal offsets the earlier row
/// is kept.
pub fn insertion_point<'a, I>(rows: I, y: f64) -> DropTarget
where
    I: IntoIterator<Item = &'a RowGeometry>,
{
    let mut closest: Option<(f64, usize)> = None;
    for row in rows {
        let offset = y - row.midpoint();
        if offset < 0.0 && closest.is_none_or(|(best, _)| offset > best) {
            closest = Some((offset, row.index));
        }
    }
    match closest {
        Some((_, index)) => DropTarget::Before(index),
        None => DropTarget::End,
    }
}

/// An in-progress drag of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Current list position of the dragged task.
    pub index: usize,
}

impl DragSession {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Final list position for the dragged task given the pointer at `y`,
    /// in the remove-then-insert convention used by `TaskList::reorder`.
    pub fn target(&self, rows: &[RowGeometry], y: f64, len: usize) -> Option<usize> {
        if self.index >= len {
            return None;
        }
        let others = rows.iter().filter(|row| row.index != self.index);
        let to = match insertion_point(others, y) {
            DropTarget::Before(before) if before < self.index => before,
            DropTarget::Before(before) => before - 1,
            DropTarget::End => len - 1,
        };
        Some(to)
    }

    /// The `(from, to)` move needed to follow the pointer, if any.
    pub fn next_move(&self, rows: &[RowGeometry], y: f64, len: usize) -> Option<(usize, usize)> {
        self.target(rows, y, len)
            .filter(|to| *to != self.index)
            .map(|to| (self.index, to))
    }

    pub fn moved_to(&mut self, index: usize) {
        self.index = index;
    }
}
